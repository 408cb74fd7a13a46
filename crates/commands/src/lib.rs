//! Sub-command dispatch over collected plugins.
//!
//! Commands are functions registered with a [`Collector`] through
//! [`command!`], each carrying the argument specs of its sub-command:
//!
//! ```ignore
//! use gather_commands::{CommandContext, add_argument, command};
//!
//! fn greet(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
//!     ctx.run(&["echo", ctx.get("who").unwrap_or("world")])?;
//!     Ok(())
//! }
//!
//! command!(COMMANDS, greet, args = [add_argument("--who")]);
//! ```
//!
//! [`set_parser`] turns the collected registry into a clap command tree, and
//! [`run`] or [`run_maybe_dry`] parse a command line and call the selected
//! function with a [`CommandContext`].
//!
//! [`Collector`]: gather_collector::Collector

mod args;
mod context;
mod dispatch;
mod entry;
mod parser;
mod runner;

#[cfg(test)]
mod tests;

pub use args::{NO_DRY_RUN, add_argument, no_dry_run};
pub use context::{CommandContext, Env, Mode, process_env};
pub use dispatch::{DispatchError, DispatchOptions, exit, rewrite_argv, run, run_maybe_dry};
pub use entry::{Entry, LOG_ENV, init_logging};
#[doc(hidden)]
pub use gather_collector as collector;
pub use parser::{CommandFn, CommandSpec, Parser, glue_args, set_parser};
pub use runner::{ProcessRunner, RunError, RunOptions, RunOutput, SystemRunner};
