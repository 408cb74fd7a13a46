//! Entry points and module discovery.
//!
//! A crate advertises its plugin modules by declaring entry points under a
//! namespace key:
//!
//! ```ignore
//! gather_collector::entry_point!("breakfast" => "gather_example::breakfast");
//! ```
//!
//! The entry point's name is informational; only its target is used.

use crate::collector::DEFAULT_NAMESPACE;
use crate::warnings::{self, Category};

/// A declared `(name, target)` pair under a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPoint {
	pub namespace: &'static str,
	pub name: &'static str,
	pub target: &'static str,
}

inventory::collect!(EntryPoint);

impl EntryPoint {
	pub const fn new(namespace: &'static str, name: &'static str, target: &'static str) -> Self {
		Self {
			namespace,
			name,
			target,
		}
	}

	pub const fn in_default_namespace(name: &'static str, target: &'static str) -> Self {
		Self::new(DEFAULT_NAMESPACE, name, target)
	}

	/// Module id this entry point resolves to.
	///
	/// Targets in the old attribute-qualified form (`crate::module:attr`) are
	/// still accepted; the attribute is dropped with a deprecation warning.
	pub fn module(&self) -> &'static str {
		let (module, attr) = split_attribute(self.target);
		if let Some(attr) = attr {
			warnings::warn(
				Category::Deprecation,
				&format!(
					"entry point `{}` targets attribute `{attr}` of `{module}`; attribute-qualified targets are deprecated",
					self.name
				),
			);
		}
		module
	}
}

fn split_attribute(target: &'static str) -> (&'static str, Option<&'static str>) {
	match target.rfind(':') {
		Some(idx) if idx > 0 && target.as_bytes()[idx - 1] != b':' => (&target[..idx], Some(&target[idx + 1..])),
		_ => (target, None),
	}
}

/// Source of module ids for a namespace.
///
/// An unknown namespace yields no modules, not an error.
pub trait Discover {
	fn modules(&self, namespace: &str) -> Vec<String>;
}

impl<F> Discover for F
where
	F: Fn(&str) -> Vec<String>,
{
	fn modules(&self, namespace: &str) -> Vec<String> {
		self(namespace)
	}
}

/// Discovery backed by [`EntryPoint`]s linked into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryDiscovery;

impl Discover for InventoryDiscovery {
	fn modules(&self, namespace: &str) -> Vec<String> {
		let _quiet = warnings::ignore(Category::Deprecation);
		inventory::iter::<EntryPoint>
			.into_iter()
			.filter(|ep| ep.namespace == namespace)
			.map(|ep| ep.module().to_owned())
			.collect()
	}
}

/// Advertises a plugin module under a namespace.
///
/// ```ignore
/// entry_point!("example" => module_path!());
/// entry_point!(in "other", "example" => "my_crate::plugins");
/// ```
#[macro_export]
macro_rules! entry_point {
	($name:literal => $target:expr $(,)?) => {
		$crate::inventory::submit! {
			$crate::EntryPoint::in_default_namespace($name, $target)
		}
	};
	(in $namespace:expr, $name:literal => $target:expr $(,)?) => {
		$crate::inventory::submit! {
			$crate::EntryPoint::new($namespace, $name, $target)
		}
	};
}
