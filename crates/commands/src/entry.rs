//! Entry points for binaries built from a command collector.

use gather_collector::{Accumulate, Collector, CollectorId, Erased};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::context::{Env, process_env};
use crate::dispatch::{self, DispatchError, DispatchOptions};
use crate::parser::{CommandSpec, Parser, set_parser};
use crate::runner::{ProcessRunner, SystemRunner};

/// Environment variable holding the log filter for binaries.
pub const LOG_ENV: &str = "GATHER_LOG";

/// Installs the stderr log subscriber, filtered by [`LOG_ENV`] and falling
/// back to `info`. Does nothing when a subscriber is already installed.
pub fn init_logging() {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
	if let Err(err) = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init()
	{
		debug!(%err, "log subscriber already installed");
	}
}

/// A command collector bound to the program prefix of its binaries.
///
/// ```ignore
/// gather_commands::entry!(pub static ENTRY);
/// command!(ENTRY, hello);
///
/// fn main() {
///     ENTRY.main()
/// }
/// ```
pub struct Entry {
	collector: Collector<CommandSpec>,
	prefix: &'static str,
}

impl Entry {
	pub const fn new(id: CollectorId, prefix: &'static str) -> Self {
		Self {
			collector: Collector::new(id),
			prefix,
		}
	}

	pub const fn id(&self) -> CollectorId {
		self.collector.id()
	}

	pub const fn prefix(&self) -> &'static str {
		self.prefix
	}

	pub const fn collector(&self) -> &Collector<CommandSpec> {
		&self.collector
	}

	/// Boxes a command for [`register!`](gather_collector::register), so that
	/// `command!(ENTRY, ..)` works like it does for a plain collector.
	pub fn erase(&self, spec: CommandSpec) -> Erased {
		self.collector.erase(spec)
	}

	/// Collects the commands and builds a parser named after the prefix.
	pub fn parser(&self) -> Result<Parser, DispatchError> {
		let collected = self.collector.collect_with(Accumulate)?;
		Ok(set_parser(collected, Some(clap::Command::new(self.prefix)))?)
	}

	/// Collects, parses `argv` and dispatches behind the dry-run gate.
	pub fn dispatch(
		&self,
		argv: &[String],
		env: &Env,
		runner: &dyn ProcessRunner,
		is_subcommand: bool,
	) -> Result<(), DispatchError> {
		let parser = self.parser()?;
		let options = DispatchOptions {
			is_subcommand,
			prefix: Some(self.prefix.to_owned()),
		};
		debug!(prefix = self.prefix, is_subcommand, "entry dispatch");
		dispatch::run_maybe_dry(&parser, argv, env, runner, &options)
	}

	/// Runs the binary as the `<prefix>` dispatcher.
	pub fn main(&self) -> ! {
		self.launch(false)
	}

	/// Runs the binary as a standalone `<prefix>-<command>`.
	pub fn sub_command(&self) -> ! {
		self.launch(true)
	}

	fn launch(&self, is_subcommand: bool) -> ! {
		init_logging();
		let argv: Vec<String> = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()).collect();
		dispatch::exit(self.dispatch(&argv, &process_env(), &SystemRunner, is_subcommand))
	}
}

impl core::fmt::Debug for Entry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Entry")
			.field("prefix", &self.prefix)
			.field("collector", &self.collector)
			.finish()
	}
}

/// Declares an [`Entry`] static.
///
/// The prefix defaults to the declaring package's name.
///
/// ```ignore
/// entry!(pub static ENTRY);
/// entry!(pub static TOOLS, prefix = "tools");
/// ```
#[macro_export]
macro_rules! entry {
	($(#[$attr:meta])* $vis:vis static $name:ident $(;)?) => {
		$crate::entry!($(#[$attr])* $vis static $name, prefix = ::core::env!("CARGO_PKG_NAME"));
	};
	($(#[$attr:meta])* $vis:vis static $name:ident, prefix = $prefix:expr $(;)?) => {
		$(#[$attr])*
		$vis static $name: $crate::Entry = $crate::Entry::new($crate::collector::collector_id!($name), $prefix);
	};
}
