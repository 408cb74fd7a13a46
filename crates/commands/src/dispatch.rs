//! Parsing a command line and calling the selected command.

use std::path::Path;

use gather_collector::{CollectError, UniqueError};
use tracing::debug;

use crate::args::NO_DRY_RUN;
use crate::context::{CommandContext, Env, Mode};
use crate::parser::{CommandSpec, Parser};
use crate::runner::ProcessRunner;

/// Program name inserted in sub-command mode when no prefix is configured.
const BASE_COMMAND: &str = "base-command";

/// How [`run_maybe_dry`] reads its command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOptions {
	/// The binary is a standalone `<prefix>-<command>` rather than the
	/// dispatcher itself.
	pub is_subcommand: bool,
	pub prefix: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
	/// Nothing on the command line selected a sub-command.
	#[error("no sub-command given")]
	NoCommand { help: String },
	/// The parser rejected the command line, or printed help or version.
	#[error(transparent)]
	Usage(#[from] clap::Error),
	#[error(transparent)]
	Collect(#[from] CollectError<CommandSpec>),
	#[error(transparent)]
	Unique(#[from] UniqueError),
	/// The command itself failed.
	#[error(transparent)]
	Command(#[from] anyhow::Error),
}

impl DispatchError {
	/// Process exit status matching this error.
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::Usage(err) => err.exit_code(),
			Self::NoCommand { .. } | Self::Collect(_) | Self::Unique(_) | Self::Command(_) => 1,
		}
	}
}

/// Turns the command line of a standalone sub-command binary into one the
/// dispatcher understands.
///
/// A program name is inserted in front, and the invoked binary's file name,
/// minus the executable suffix and `<prefix>-`, becomes the sub-command.
pub fn rewrite_argv(mut argv: Vec<String>, options: &DispatchOptions) -> Vec<String> {
	if !options.is_subcommand {
		return argv;
	}

	argv.insert(0, options.prefix.clone().unwrap_or_else(|| BASE_COMMAND.to_owned()));
	if let Some(invoked) = argv.get_mut(1) {
		let mut name = Path::new(invoked.as_str())
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| invoked.clone());
		if !std::env::consts::EXE_SUFFIX.is_empty()
			&& let Some(stem) = name.strip_suffix(std::env::consts::EXE_SUFFIX)
		{
			name = stem.to_owned();
		}
		if let Some(prefix) = &options.prefix
			&& let Some(command) = name.strip_prefix(&format!("{prefix}-"))
		{
			name = command.to_owned();
		}
		*invoked = name;
	}
	argv
}

/// Parses `argv` and calls the selected command in plain mode.
///
/// `argv[0]` is the program name.
pub fn run(parser: &Parser, argv: &[String], env: &Env, runner: &dyn ProcessRunner) -> Result<(), DispatchError> {
	dispatch(parser, argv, env, runner, |_| Mode::Plain)
}

/// Parses `argv` and calls the selected command behind the dry-run gate.
///
/// [`CommandContext::run`] only launches processes when the command declared
/// and received `--no-dry-run`.
pub fn run_maybe_dry(
	parser: &Parser,
	argv: &[String],
	env: &Env,
	runner: &dyn ProcessRunner,
	options: &DispatchOptions,
) -> Result<(), DispatchError> {
	let argv = rewrite_argv(argv.to_vec(), options);
	dispatch(parser, &argv, env, runner, |matches| Mode::Gated {
		no_dry_run: matches.try_get_one::<bool>(NO_DRY_RUN).ok().flatten().copied().unwrap_or(false),
	})
}

fn dispatch(
	parser: &Parser,
	argv: &[String],
	env: &Env,
	runner: &dyn ProcessRunner,
	mode: impl FnOnce(&clap::ArgMatches) -> Mode,
) -> Result<(), DispatchError> {
	let matches = parser.command().clone().try_get_matches_from(argv)?;
	let Some((name, args)) = matches.subcommand() else {
		return Err(DispatchError::NoCommand { help: parser.help() });
	};
	let Some(target) = parser.target(name) else {
		return Err(DispatchError::NoCommand { help: parser.help() });
	};

	let mode = mode(args);
	debug!(command = name, ?mode, "dispatching");
	let ctx = CommandContext::new(name, args, env, runner, mode);
	target(&ctx)?;
	Ok(())
}

/// Reports the outcome of a dispatch and terminates the process.
///
/// Help for a missing sub-command goes to stdout, clap's own output is
/// printed the way clap prints it, and any other error goes to stderr.
pub fn exit(result: Result<(), DispatchError>) -> ! {
	let err = match result {
		Ok(()) => std::process::exit(0),
		Err(err) => err,
	};
	let code = err.exit_code();
	match err {
		DispatchError::NoCommand { help } => print!("{help}"),
		DispatchError::Usage(err) => err.exit(),
		DispatchError::Command(err) => eprintln!("Error: {err:?}"),
		other => eprintln!("Error: {other}"),
	}
	std::process::exit(code)
}
