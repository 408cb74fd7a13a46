//! Runs other registered commands to check that registration works.

use anyhow::{Context, bail};
use gather_commands::{CommandContext, command};
use tracing::info;

use crate::ENTRY;

/// Runs `hello world` through this same binary and checks the greeting.
fn selftest(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
	let exe = std::env::current_exe().context("locating the running binary")?;
	let exe = exe.to_string_lossy().into_owned();
	let output = ctx.safe_run(&[exe.as_str(), "hello", "world"])?;

	let (greeting, contents) = output
		.stdout
		.trim_end()
		.split_once(' ')
		.with_context(|| format!("unexpected hello output: {:?}", output.stdout))?;
	if greeting != "Hello" || contents != "world" {
		bail!("hello printed {greeting:?} {contents:?}");
	}
	info!("Self-test passed");
	Ok(())
}

command!(ENTRY, selftest);
