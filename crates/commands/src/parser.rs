//! Building a sub-command parser from collected commands.

use clap::{Arg, Command};
use gather_collector::{Registry, UniqueError, Wrapper, unique};
use tracing::debug;

use crate::context::CommandContext;

/// Signature of a dispatchable command.
pub type CommandFn = fn(&CommandContext<'_>) -> anyhow::Result<()>;

/// A command together with the argument specs of its sub-command.
pub type CommandSpec = Wrapper<CommandFn, Vec<Arg>>;

/// Transform gluing argument specs onto a command at registration.
pub fn glue_args(args: Vec<Arg>) -> impl FnOnce(CommandFn) -> CommandSpec {
	Wrapper::glue(args)
}

/// A clap command tree plus the function behind each sub-command.
#[derive(Debug, Clone)]
pub struct Parser {
	command: Command,
	targets: Registry<CommandFn>,
}

impl Parser {
	pub fn command(&self) -> &Command {
		&self.command
	}

	/// Function registered under `name`.
	pub fn target(&self, name: &str) -> Option<CommandFn> {
		self.targets.get(name).copied()
	}

	/// Sub-command names in sorted order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.targets.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Rendered top-level help.
	pub fn help(&self) -> String {
		self.command.clone().render_help().to_string()
	}
}

/// Builds a [`Parser`] from commands collected with
/// [`Accumulate`](gather_collector::Accumulate).
///
/// Every name must have exactly one command. Sub-commands are added to
/// `parser`, or to a fresh `gather` command, in sorted name order.
pub fn set_parser(collected: Registry<Vec<CommandSpec>>, parser: Option<Command>) -> Result<Parser, UniqueError> {
	let collected = unique(collected)?;
	let mut entries: Vec<(String, CommandSpec)> = collected.into_iter().collect();
	entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

	let mut command = parser.unwrap_or_else(|| Command::new("gather"));
	let mut targets = Registry::default();
	for (name, spec) in entries {
		debug!(command = %name, args = spec.extra.len(), "adding sub-command");
		command = command.subcommand(Command::new(name.clone()).args(spec.extra));
		targets.insert(name, spec.original);
	}

	Ok(Parser { command, targets })
}

/// Registers a command function with a command collector.
///
/// ```ignore
/// command!(COMMANDS, write_files, args = [no_dry_run(), add_argument("--output-dir")]);
/// command!(COMMANDS, greet, name = "say-hello");
/// ```
///
/// `args` become the sub-command's arguments; `name` overrides the function's
/// identifier as the sub-command name.
#[macro_export]
macro_rules! command {
	($collector:path, $item:ident $(, args = [$($arg:expr),* $(,)?])? $(, name = $name:expr)? $(,)?) => {
		$crate::collector::register!(
			$collector,
			$item
			$(, name = $name)?,
			transform = $crate::glue_args(::std::vec![$($($arg),*)?])
		);
	};
}
