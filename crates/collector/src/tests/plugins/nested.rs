use super::MAIN_COMMANDS;
use crate::register;

fn nested(args: &str) -> String {
	format!("nested {args}")
}

register!(MAIN_COMMANDS, nested);
