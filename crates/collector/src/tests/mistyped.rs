//! A hand-written record whose value does not match its collector.

use crate::{Erased, Registration, collector};

collector!(pub static NUMBERS: Collector<u32>);

fn build() -> Erased {
	Box::new("not a number")
}

inventory::submit! {
	Registration::new(NUMBERS.id(), module_path!(), "text", build)
}
