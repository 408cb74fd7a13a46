//! Test plugins, advertised under the default namespace.

mod absent;
mod nested;

use super::helper::weird_decorator;
use crate::{Wrapper, collector, entry_point, register};

pub type Command = fn(&str) -> String;

collector!(pub static MAIN_COMMANDS: Collector<Command>);
collector!(pub static OTHER_COMMANDS: Collector<Command>);
collector!(pub static TRANSFORM_COMMANDS: Collector<Wrapper<Command, u32>>);
collector!(pub static COLLIDING_COMMANDS: Collector<Command>);
collector!(pub static NON_COLLIDING_COMMANDS: Collector<Command>);
collector!(pub static EMPTY_COMMANDS: Collector<Command>);
collector!(pub static BUILD_STEPS: Collector<fn() -> u32>);

entry_point!("tests" => module_path!());

fn main1(args: &str) -> String {
	format!("main1 {args}")
}

register!(MAIN_COMMANDS, main1);

fn main2(args: &str) -> String {
	format!("main2 {args}")
}

register!(MAIN_COMMANDS, main2, name = "weird_name");

fn main3(args: &str) -> String {
	format!("main3 {args}")
}

register!(MAIN_COMMANDS, main3, name = "bar");
register!(OTHER_COMMANDS, main3, name = "weird_name");

fn main4(args: &str) -> String {
	format!("main4 {args}")
}

register!(OTHER_COMMANDS, main4, name = "baz");

fn weird_function(_args: &str) -> String {
	"weird".to_owned()
}

weird_decorator!(weird_function);

fn fooish(_args: &str) -> String {
	"fooish".to_owned()
}

register!(TRANSFORM_COMMANDS, fooish, transform = Wrapper::<Command, u32>::glue(5));

fn weird_name1(_args: &str) -> String {
	"weird_name1".to_owned()
}

register!(NON_COLLIDING_COMMANDS, weird_name1, name = "weird_name");
register!(COLLIDING_COMMANDS, weird_name1, name = "weird_name");

fn weird_name2(_args: &str) -> String {
	"weird_name2".to_owned()
}

register!(COLLIDING_COMMANDS, weird_name2, name = "weird_name");

fn weird_name3(_args: &str) -> String {
	"weird_name3".to_owned()
}

register!(COLLIDING_COMMANDS, weird_name3, name = "weird_name");

fn build() -> u32 {
	7
}

register!(BUILD_STEPS, build);
