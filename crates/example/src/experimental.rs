//! Commands that only load when `GATHER_EXPERIMENTAL` is set.

use gather_collector::{ImportError, module_guard};
use gather_commands::{CommandContext, add_argument, command, no_dry_run};

use crate::ENTRY;

const ENABLE_ENV: &str = "GATHER_EXPERIMENTAL";

fn enabled() -> Result<(), ImportError> {
	match std::env::var_os(ENABLE_ENV) {
		Some(_) => Ok(()),
		None => Err(ImportError::Absent(format!("{ENABLE_ENV} is not set"))),
	}
}

module_guard!(enabled);

/// Creates a directory, only for real with `--no-dry-run`.
fn mkdir(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
	let path = ctx.get("path").unwrap_or(".");
	ctx.run(&["mkdir", "-p", path])?;
	Ok(())
}

command!(ENTRY, mkdir, args = [no_dry_run(), add_argument("path")]);
