//! Example plugins for gather.
//!
//! Every module of this crate is advertised under the default namespace, so
//! the commands registered anywhere below are collected by [`ENTRY`] and the
//! foods by [`breakfast::BREAKFAST`].

pub mod breakfast;
mod commands;
mod experimental;
mod selftest;

use gather_collector::entry_point;

gather_commands::entry!(
	/// Commands of the `gather-example` binaries.
	pub static ENTRY
);

entry_point!("example" => module_path!());
