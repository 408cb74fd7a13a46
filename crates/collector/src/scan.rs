//! Module import for collection passes.
//!
//! Importing a module id means gathering the registrations declared in that
//! module or beneath it. Modules may carry a [`ModuleGuard`] that runs first
//! and can declare the module absent, or fail the import outright.

use std::ptr;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::registration::Registration;

/// Outcome of a module guard that refused the import.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
	/// The module is not there; the collection pass skips it.
	#[error("module not available: {0}")]
	Absent(String),
	/// The module is there but cannot be loaded; the collection pass aborts.
	#[error("{0}")]
	Failed(String),
}

/// A genuine import failure, tied to the module that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to import plugin module `{module}`: {reason}")]
pub struct ImportFailure {
	pub module: String,
	pub reason: String,
}

/// Load-time check attached to a module with [`module_guard!`](crate::module_guard).
pub struct ModuleGuard {
	pub module: &'static str,
	pub check: fn() -> Result<(), ImportError>,
}

inventory::collect!(ModuleGuard);

/// Result of importing one module id.
#[derive(Debug)]
pub enum Import {
	/// Nothing is declared under the id.
	Absent,
	/// Registrations reachable from the id that this pass has not seen yet.
	Loaded(Vec<&'static Registration>),
}

/// Imports modules for one collection pass.
///
/// A registration reachable through several module ids is returned by the
/// first import that reaches it only.
#[derive(Debug, Default)]
pub struct Scanner {
	seen: FxHashSet<*const Registration>,
}

impl Scanner {
	pub fn new() -> Self {
		Self::default()
	}

	/// Imports `module`.
	///
	/// Guards on the module or any of its ancestors decide for the whole
	/// import. Guards on submodules only exclude their own subtree.
	pub fn import(&mut self, module: &str) -> Result<Import, ImportFailure> {
		let mut found = false;
		let mut skipped: Vec<&'static str> = Vec::new();

		for guard in inventory::iter::<ModuleGuard> {
			if within(module, guard.module) {
				match (guard.check)() {
					Ok(()) => {}
					Err(ImportError::Absent(reason)) => {
						debug!(module, guard = guard.module, %reason, "skipping module under an absent guard");
						return Ok(Import::Absent);
					}
					Err(ImportError::Failed(reason)) => {
						return Err(ImportFailure {
							module: guard.module.to_owned(),
							reason,
						});
					}
				}
				found |= guard.module == module;
				continue;
			}
			if !within(guard.module, module) {
				continue;
			}
			found = true;
			match (guard.check)() {
				Ok(()) => {}
				Err(ImportError::Absent(reason)) => {
					debug!(module = guard.module, %reason, "skipping absent module");
					skipped.push(guard.module);
				}
				Err(ImportError::Failed(reason)) => {
					return Err(ImportFailure {
						module: guard.module.to_owned(),
						reason,
					});
				}
			}
		}

		let mut loaded = Vec::new();
		for registration in inventory::iter::<Registration> {
			if !within(registration.module, module) {
				continue;
			}
			found = true;
			if skipped.iter().any(|s| within(registration.module, s)) {
				continue;
			}
			if self.seen.insert(ptr::from_ref(registration)) {
				loaded.push(registration);
			}
		}

		if !found {
			return Ok(Import::Absent);
		}
		trace!(module, registrations = loaded.len(), "imported");
		Ok(Import::Loaded(loaded))
	}
}

/// Whether `path` is `root` or one of its submodules.
pub(crate) fn within(path: &str, root: &str) -> bool {
	match path.strip_prefix(root) {
		Some("") => true,
		Some(rest) => rest.starts_with("::"),
		None => false,
	}
}

/// Attaches a load-time guard to the calling module.
///
/// ```ignore
/// module_guard!(|| match std::env::var_os("DISPLAY") {
///     Some(_) => Ok(()),
///     None => Err(ImportError::Absent("no display".into())),
/// });
/// ```
#[macro_export]
macro_rules! module_guard {
	($check:expr $(,)?) => {
		$crate::inventory::submit! {
			$crate::ModuleGuard {
				module: ::core::module_path!(),
				check: $check,
			}
		}
	};
}
