//! Collision policies.
//!
//! A [`Strategy`] decides what a name maps to once a new candidate arrives.
//! The collector stores whatever [`Strategy::resolve`] returns under that name,
//! so a strategy that takes the current entry out of the registry must hand
//! back its replacement.

use crate::collector::Registry;

/// Raised by [`FailFast`] when a name is registered twice.
///
/// Carries a snapshot of the registry as it stood, the contested name, and the
/// candidate that was refused.
#[derive(Debug, Clone)]
pub struct Collision<T> {
	pub registry: Registry<T>,
	pub name: String,
	pub candidate: T,
}

impl<T> core::fmt::Display for Collision<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "name `{}` is already registered", self.name)
	}
}

impl<T: core::fmt::Debug> std::error::Error for Collision<T> {}

/// Policy resolving a candidate against the registry built so far.
pub trait Strategy<T> {
	/// Value stored per name.
	type Output;

	/// Returns the value that should occupy `name`.
	fn resolve(
		&self,
		registry: &mut Registry<Self::Output>,
		name: &str,
		candidate: T,
	) -> Result<Self::Output, Collision<T>>;
}

/// Last candidate seen for a name wins.
///
/// Scan order follows discovery and link order, neither of which is
/// specified, so callers must not rely on which candidate survives.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickOne;

impl<T> Strategy<T> for PickOne {
	type Output = T;

	fn resolve(&self, _registry: &mut Registry<T>, _name: &str, candidate: T) -> Result<T, Collision<T>> {
		Ok(candidate)
	}
}

/// Every candidate for a name is kept.
///
/// Each name maps to one entry per registration, even when there is only one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulate;

impl<T> Strategy<T> for Accumulate {
	type Output = Vec<T>;

	fn resolve(
		&self,
		registry: &mut Registry<Vec<T>>,
		name: &str,
		candidate: T,
	) -> Result<Vec<T>, Collision<T>> {
		let mut values = registry.remove(name).unwrap_or_default();
		values.push(candidate);
		Ok(values)
	}
}

/// A second registration under a name is a [`Collision`].
///
/// The collector keeps scanning after a collision and reports the first one
/// once the pass is complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

impl<T: Clone> Strategy<T> for FailFast {
	type Output = T;

	fn resolve(&self, registry: &mut Registry<T>, name: &str, candidate: T) -> Result<T, Collision<T>> {
		if registry.contains_key(name) {
			return Err(Collision {
				registry: registry.clone(),
				name: name.to_owned(),
				candidate,
			});
		}
		Ok(candidate)
	}
}

/// [`PickOne`] as a plain function.
pub fn pick_one<T>(registry: &mut Registry<T>, name: &str, candidate: T) -> Result<T, Collision<T>> {
	PickOne.resolve(registry, name, candidate)
}

/// [`Accumulate`] as a plain function.
pub fn accumulate<T>(registry: &mut Registry<Vec<T>>, name: &str, candidate: T) -> Result<Vec<T>, Collision<T>> {
	Accumulate.resolve(registry, name, candidate)
}

/// [`FailFast`] as a plain function.
pub fn fail_fast<T: Clone>(registry: &mut Registry<T>, name: &str, candidate: T) -> Result<T, Collision<T>> {
	FailFast.resolve(registry, name, candidate)
}
