//! Per-dispatch context handed to commands.

use std::collections::BTreeMap;

use clap::ArgMatches;
use tracing::info;

use crate::runner::{ProcessRunner, RunError, RunOptions, RunOutput};

/// Environment visible to dispatched commands.
pub type Env = BTreeMap<String, String>;

/// Snapshot of the process environment. Non-UTF-8 entries are converted
/// lossily.
pub fn process_env() -> Env {
	std::env::vars_os()
		.map(|(key, value)| (key.to_string_lossy().into_owned(), value.to_string_lossy().into_owned()))
		.collect()
}

/// How [`CommandContext::run`] treats side-effecting processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// `run` goes straight to the runner.
	Plain,
	/// `run` only executes when `--no-dry-run` was passed.
	Gated { no_dry_run: bool },
}

/// Everything a command sees: parsed arguments, environment and runners.
///
/// Built once per dispatch.
pub struct CommandContext<'a> {
	/// Name the command was dispatched under.
	pub name: &'a str,
	/// Arguments parsed for the sub-command.
	pub args: &'a ArgMatches,
	pub env: &'a Env,
	mode: Mode,
	runner: &'a dyn ProcessRunner,
}

impl<'a> CommandContext<'a> {
	pub fn new(name: &'a str, args: &'a ArgMatches, env: &'a Env, runner: &'a dyn ProcessRunner, mode: Mode) -> Self {
		Self {
			name,
			args,
			env,
			mode,
			runner,
		}
	}

	/// Whether `run` would skip execution.
	pub fn is_dry_run(&self) -> bool {
		matches!(self.mode, Mode::Gated { no_dry_run: false })
	}

	/// String value of an argument, if it was declared and given.
	pub fn get(&self, id: &str) -> Option<&'a str> {
		self.args.try_get_one::<String>(id).ok().flatten().map(String::as_str)
	}

	/// Every value of a multi-valued argument, in command-line order.
	pub fn get_all(&self, id: &str) -> Vec<&'a str> {
		match self.args.try_get_many::<String>(id) {
			Ok(Some(values)) => values.map(String::as_str).collect(),
			_ => Vec::new(),
		}
	}

	/// Value of a boolean flag; `false` when the flag was never declared.
	pub fn flag(&self, id: &str) -> bool {
		self.args.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
	}

	/// Runs a side-effecting process.
	///
	/// In plain mode this is the runner with default options. Behind the gate
	/// it behaves like [`safe_run`](Self::safe_run) when `--no-dry-run` was
	/// given and otherwise only logs, returning `Ok(None)`.
	pub fn run(&self, argv: &[&str]) -> Result<Option<RunOutput>, RunError> {
		let options = match self.mode {
			Mode::Plain => RunOptions::default(),
			Mode::Gated { .. } => RunOptions::safe(),
		};
		self.run_with(argv, options)
	}

	pub fn run_with(&self, argv: &[&str], options: RunOptions) -> Result<Option<RunOutput>, RunError> {
		match self.mode {
			Mode::Plain => self.orig_run(argv, options).map(Some),
			Mode::Gated { no_dry_run: true } => self.safe_run_with(argv, options).map(Some),
			Mode::Gated { no_dry_run: false } => {
				info!("Running: {argv:?}");
				info!("Dry run, skipping");
				Ok(None)
			}
		}
	}

	/// Runs a process regardless of the gate, capturing text output and
	/// failing on non-zero exit.
	pub fn safe_run(&self, argv: &[&str]) -> Result<RunOutput, RunError> {
		self.safe_run_with(argv, RunOptions::safe())
	}

	/// [`safe_run`](Self::safe_run) with explicit options. A non-zero exit is
	/// reported as [`RunError::Failed`], carrying the captured output.
	pub fn safe_run_with(&self, argv: &[&str], options: RunOptions) -> Result<RunOutput, RunError> {
		info!("Running: {argv:?}");
		self.orig_run(argv, options).map_err(RunError::with_output)
	}

	/// The runner itself, without logging or gating.
	pub fn orig_run(&self, argv: &[&str], options: RunOptions) -> Result<RunOutput, RunError> {
		let argv: Vec<String> = argv.iter().map(|arg| (*arg).to_owned()).collect();
		self.runner.run(&argv, options)
	}
}

impl core::fmt::Debug for CommandContext<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("CommandContext")
			.field("name", &self.name)
			.field("args", &self.args)
			.field("mode", &self.mode)
			.finish_non_exhaustive()
	}
}
