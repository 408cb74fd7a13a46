//! Commands that only talk back.

use gather_commands::{CommandContext, add_argument, command};

use crate::ENTRY;

fn words() -> clap::Arg {
	add_argument("words").required(false).num_args(0..)
}

/// Says hello, printing the arguments.
fn hello(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
	println!("Hello {}", ctx.get_all("words").join(" "));
	Ok(())
}

command!(ENTRY, hello, args = [words()]);

/// Says goodbye, printing the arguments.
fn goodbye(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
	println!("Goodbye {}", ctx.get_all("words").join(" "));
	Ok(())
}

command!(ENTRY, goodbye, args = [words()]);
