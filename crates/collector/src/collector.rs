//! Collector identity and the collection pass.

use std::any::type_name;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::discovery::{Discover, InventoryDiscovery};
use crate::error::CollectError;
use crate::registration::{Erased, Registration};
use crate::scan::{Import, Scanner};
use crate::strategy::{PickOne, Strategy};

/// Namespace key that entry points are declared under unless a collector
/// asks for another one.
pub const DEFAULT_NAMESPACE: &str = "gather";

/// Mapping from registered name to resolved value, built fresh per pass.
pub type Registry<T> = FxHashMap<String, T>;

/// Ownership tag carried by every [`Registration`].
///
/// Two collectors never share an id; [`collector_id!`](crate::collector_id)
/// derives one from the declaring module path and static name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectorId(&'static str);

impl CollectorId {
	pub const fn new(key: &'static str) -> Self {
		Self(key)
	}

	pub const fn as_str(self) -> &'static str {
		self.0
	}
}

impl core::fmt::Display for CollectorId {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.0)
	}
}

/// A plugin collector.
///
/// Declared as a `static` so that registrations in other crates can refer to
/// it. Immutable once constructed.
pub struct Collector<T> {
	id: CollectorId,
	name: Option<&'static str>,
	depth: usize,
	namespace: &'static str,
	_marker: PhantomData<fn() -> T>,
}

impl<T> Collector<T> {
	pub const fn new(id: CollectorId) -> Self {
		Self {
			id,
			name: None,
			depth: 1,
			namespace: DEFAULT_NAMESPACE,
			_marker: PhantomData,
		}
	}

	/// Sets the display name.
	pub const fn named(mut self, name: &'static str) -> Self {
		self.name = Some(name);
		self
	}

	/// Sets the lookup depth. Carried as configuration only.
	pub const fn with_depth(mut self, depth: usize) -> Self {
		self.depth = depth;
		self
	}

	/// Reads entry points from `namespace` instead of [`DEFAULT_NAMESPACE`].
	pub const fn in_namespace(mut self, namespace: &'static str) -> Self {
		self.namespace = namespace;
		self
	}

	pub const fn id(&self) -> CollectorId {
		self.id
	}

	pub const fn name(&self) -> Option<&'static str> {
		self.name
	}

	pub const fn depth(&self) -> usize {
		self.depth
	}

	pub const fn namespace(&self) -> &'static str {
		self.namespace
	}
}

impl<T: 'static> Collector<T> {
	/// Boxes a value for storage in a [`Registration`].
	///
	/// Used by [`register!`](crate::register) so that the registered item is
	/// coerced to `T` at the registration site.
	pub fn erase(&self, value: T) -> Erased {
		Box::new(value)
	}

	/// Collects with [`PickOne`]: one of the candidates for each name wins.
	pub fn collect(&self) -> Result<Registry<T>, CollectError<T>> {
		self.collect_with(PickOne)
	}

	/// Collects every registration for this collector, resolving names with
	/// `strategy`.
	pub fn collect_with<S>(&self, strategy: S) -> Result<Registry<S::Output>, CollectError<T>>
	where
		S: Strategy<T>,
	{
		self.collect_from(&InventoryDiscovery, strategy)
	}

	/// Runs one collection pass against an explicit discovery source.
	///
	/// Absent modules contribute nothing. A failing module aborts the pass.
	/// A collision reported by the strategy is held until every module has
	/// been scanned; only the first one is returned.
	pub fn collect_from<D, S>(
		&self,
		discovery: &D,
		strategy: S,
	) -> Result<Registry<S::Output>, CollectError<T>>
	where
		D: Discover + ?Sized,
		S: Strategy<T>,
	{
		let modules = discovery.modules(self.namespace);
		debug!(collector = %self.id, namespace = self.namespace, modules = modules.len(), "collecting");

		let mut scanner = Scanner::new();
		let mut registry = Registry::default();
		let mut collision = None;

		for module in &modules {
			let registrations = match scanner.import(module)? {
				Import::Absent => {
					debug!(module = %module, "plugin module not present");
					continue;
				}
				Import::Loaded(registrations) => registrations,
			};

			for registration in registrations.into_iter().filter(|r| r.owner == self.id) {
				let candidate = self.unerase(registration)?;
				trace!(collector = %self.id, name = registration.name, module = registration.module, "registering");
				match strategy.resolve(&mut registry, registration.name, candidate) {
					Ok(value) => {
						registry.insert(registration.name.to_owned(), value);
					}
					Err(err) => {
						debug!(collector = %self.id, name = registration.name, "name collision");
						if collision.is_none() {
							collision = Some(err);
						}
					}
				}
			}
		}

		match collision {
			Some(err) => Err(CollectError::Collision(err)),
			None => Ok(registry),
		}
	}

	fn unerase(&self, registration: &Registration) -> Result<T, CollectError<T>> {
		(registration.build)()
			.downcast::<T>()
			.map(|value| *value)
			.map_err(|_| CollectError::TypeMismatch {
				name: registration.name,
				module: registration.module,
				expected: type_name::<T>(),
			})
	}
}

impl<T> core::fmt::Debug for Collector<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Collector")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("depth", &self.depth)
			.field("namespace", &self.namespace)
			.finish()
	}
}

/// Derives a [`CollectorId`] from the calling module and a static's name.
#[macro_export]
macro_rules! collector_id {
	($name:ident) => {
		$crate::CollectorId::new(concat!(module_path!(), "::", stringify!($name)))
	};
}

/// Declares a collector static with a derived id.
///
/// ```ignore
/// collector!(pub static COMMANDS: Collector<CommandSpec>);
/// ```
#[macro_export]
macro_rules! collector {
	($(#[$attr:meta])* $vis:vis static $name:ident: Collector<$ty:ty> $(;)?) => {
		$(#[$attr])*
		$vis static $name: $crate::Collector<$ty> = $crate::Collector::new($crate::collector_id!($name));
	};
}
