//! Plugin registration and collection.
//!
//! A [`Collector`] owns a registration namespace. Any crate linked into the
//! final binary can register items against it with [`register!`]; nothing is
//! stored at that point beyond a static [`Registration`] record. When the
//! application calls [`Collector::collect`], the collector asks discovery for
//! every module advertised under its namespace ([`entry_point!`]), scans those
//! modules for records tagged with its own id, and resolves names through a
//! [`Strategy`].
//!
//! ```ignore
//! use gather_collector::{Collector, collector, entry_point, register};
//!
//! collector!(pub static GREETERS: Collector<fn() -> &'static str>);
//! entry_point!("greeters" => module_path!());
//!
//! fn hello() -> &'static str { "hello" }
//! register!(GREETERS, hello);
//!
//! let greeters = GREETERS.collect()?;
//! assert_eq!((greeters["hello"])(), "hello");
//! ```
//!
//! # Modules
//!
//! - [`collector`] - collector identity and the collection pass
//! - [`registration`] - link-time registration records
//! - [`strategy`] - collision policies
//! - [`discovery`] - entry points and module discovery
//! - [`scan`] - module import and guards
//! - [`wrapper`] - [`Wrapper`] and [`unique`]
//! - [`warnings`] - scoped warning filters

pub mod collector;
pub mod discovery;
mod error;
pub mod registration;
pub mod scan;
pub mod strategy;
pub mod warnings;
pub mod wrapper;

#[cfg(test)]
mod tests;

pub use collector::{Collector, CollectorId, DEFAULT_NAMESPACE, Registry};
pub use discovery::{Discover, EntryPoint, InventoryDiscovery};
pub use error::CollectError;
#[doc(hidden)]
pub use inventory;
pub use registration::{Erased, Registration};
pub use scan::{Import, ImportError, ImportFailure, ModuleGuard, Scanner};
pub use strategy::{Accumulate, Collision, FailFast, PickOne, Strategy, accumulate, fail_fast, pick_one};
pub use wrapper::{UniqueError, Wrapper, unique};
