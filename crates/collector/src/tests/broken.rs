//! A module that refuses to load.

use super::plugins::MAIN_COMMANDS;
use crate::{ImportError, module_guard, register};

fn refuse() -> Result<(), ImportError> {
	Err(ImportError::Failed("broken on purpose".to_owned()))
}

module_guard!(refuse);

fn unreachable_command(_args: &str) -> String {
	"unreachable".to_owned()
}

register!(MAIN_COMMANDS, unreachable_command);

mod inner {
	use super::super::plugins::MAIN_COMMANDS;
	use crate::register;

	fn orphan(_args: &str) -> String {
		"orphan".to_owned()
	}

	register!(MAIN_COMMANDS, orphan);
}
