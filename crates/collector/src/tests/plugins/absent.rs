//! Opts out at load time; its registrations never reach a registry.

use super::MAIN_COMMANDS;
use crate::{ImportError, module_guard, register};

fn only_when_requested() -> Result<(), ImportError> {
	Err(ImportError::Absent("only loaded on request".to_owned()))
}

module_guard!(only_when_requested);

fn ghost(_args: &str) -> String {
	"ghost".to_owned()
}

register!(MAIN_COMMANDS, ghost);

mod inner {
	use super::super::MAIN_COMMANDS;
	use crate::register;

	fn child(_args: &str) -> String {
		"child".to_owned()
	}

	register!(MAIN_COMMANDS, child);
}
