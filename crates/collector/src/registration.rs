//! Link-time registration records.
//!
//! [`register!`](crate::register) leaves the registered item untouched and
//! submits a [`Registration`] through `inventory`. The record is inert until a
//! collector scans the declaring module: only then is the transform applied
//! and the value handed to the collector's strategy.

use std::any::Any;

use crate::collector::CollectorId;

/// Type-erased value produced by a registration.
pub type Erased = Box<dyn Any>;

/// A pending registration: `{owner, module, name, build}`.
pub struct Registration {
	/// Collector the record belongs to.
	pub owner: CollectorId,
	/// `module_path!()` of the declaring module.
	pub module: &'static str,
	/// Name override, or the registered item's identifier.
	pub name: &'static str,
	/// Applies the transform to the item and erases the result.
	pub build: fn() -> Erased,
}

inventory::collect!(Registration);

impl Registration {
	pub const fn new(
		owner: CollectorId,
		module: &'static str,
		name: &'static str,
		build: fn() -> Erased,
	) -> Self {
		Self {
			owner,
			module,
			name,
			build,
		}
	}
}

impl core::fmt::Debug for Registration {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Registration")
			.field("owner", &self.owner)
			.field("module", &self.module)
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}

/// Registers an item with a collector.
///
/// ```ignore
/// register!(COMMANDS, hello);
/// register!(COMMANDS, main, name = "another-name");
/// register!(TRANSFORMED, fooish, transform = Wrapper::<Greeter, _>::glue(5));
/// ```
///
/// The effective name is `name` when given, otherwise the item's identifier.
/// `transform` defaults to the identity; its result must be the collector's
/// item type. The same item may be registered with any number of collectors.
#[macro_export]
macro_rules! register {
	($collector:path, $item:ident $(, name = $name:expr)? $(, transform = $transform:expr)? $(,)?) => {
		const _: () = {
			fn __gather_build() -> $crate::Erased {
				$collector.erase($crate::__reg_opt!($({($transform)})?, ::core::convert::identity)($item))
			}

			$crate::inventory::submit! {
				$crate::Registration::new(
					$collector.id(),
					::core::module_path!(),
					$crate::__reg_opt!($({$name})?, ::core::stringify!($item)),
					__gather_build,
				)
			}
		};
	};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __reg_opt {
	(, $default:expr) => {
		$default
	};
	({$val:expr}, $default:expr) => {
		$val
	};
}
