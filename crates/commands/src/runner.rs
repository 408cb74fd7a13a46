//! Process execution.
//!
//! Commands never launch processes directly; they go through a
//! [`ProcessRunner`] handed to the dispatcher, which defaults to
//! [`SystemRunner`].

use std::io;
use std::process::{Command, Output};

/// How a process is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
	/// Capture stdout and stderr as text instead of inheriting them.
	pub capture_output: bool,
	/// Treat a non-zero exit as [`RunError::Status`].
	pub check: bool,
}

impl RunOptions {
	/// Captured output, failing on non-zero exit.
	pub const fn safe() -> Self {
		Self {
			capture_output: true,
			check: true,
		}
	}
}

/// Result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOutput {
	/// Exit code; `None` when the process was killed by a signal.
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

impl RunOutput {
	pub fn success(&self) -> bool {
		self.code == Some(0)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
	#[error("empty command line")]
	Empty,
	#[error("failed to launch `{program}`: {source}")]
	Spawn {
		program: String,
		#[source]
		source: io::Error,
	},
	#[error("`{}` exited with {}", .argv.join(" "), describe(.code))]
	Status {
		argv: Vec<String>,
		code: Option<i32>,
		stdout: String,
		stderr: String,
	},
	/// [`RunError::Status`] with the captured output attached to the message.
	#[error("`{}` exited with {}\nSTDERR: {stderr}\nSTDOUT: {stdout}", .argv.join(" "), describe(.code))]
	Failed {
		argv: Vec<String>,
		code: Option<i32>,
		stdout: String,
		stderr: String,
	},
}

impl RunError {
	/// Attaches captured stdout and stderr to a non-zero exit.
	pub fn with_output(self) -> Self {
		match self {
			Self::Status {
				argv,
				code,
				stdout,
				stderr,
			} => Self::Failed {
				argv,
				code,
				stdout,
				stderr,
			},
			other => other,
		}
	}
}

fn describe(code: &Option<i32>) -> String {
	match code {
		Some(code) => format!("status {code}"),
		None => "a signal".to_owned(),
	}
}

/// Launches processes on behalf of commands.
pub trait ProcessRunner {
	fn run(&self, argv: &[String], options: RunOptions) -> Result<RunOutput, RunError>;
}

impl<F> ProcessRunner for F
where
	F: Fn(&[String], RunOptions) -> Result<RunOutput, RunError>,
{
	fn run(&self, argv: &[String], options: RunOptions) -> Result<RunOutput, RunError> {
		self(argv, options)
	}
}

/// Runs processes with [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
	fn run(&self, argv: &[String], options: RunOptions) -> Result<RunOutput, RunError> {
		let (program, args) = argv.split_first().ok_or(RunError::Empty)?;
		let mut command = Command::new(program);
		command.args(args);

		let launched = if options.capture_output {
			command.output()
		} else {
			command.status().map(|status| Output {
				status,
				stdout: Vec::new(),
				stderr: Vec::new(),
			})
		};
		let output = launched.map_err(|source| RunError::Spawn {
			program: program.clone(),
			source,
		})?;

		let code = output.status.code();
		let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
		let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

		if options.check && !output.status.success() {
			return Err(RunError::Status {
				argv: argv.to_vec(),
				code,
				stdout,
				stderr,
			});
		}

		Ok(RunOutput { code, stdout, stderr })
	}
}
