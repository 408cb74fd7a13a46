//! Extra data glued to registered items, and single-owner unwrapping.

use crate::collector::Registry;

/// A registered item paired with data supplied at registration.
///
/// `original` is always the registered item itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapper<O, E> {
	pub original: O,
	pub extra: E,
}

impl<O, E> Wrapper<O, E> {
	pub const fn new(original: O, extra: E) -> Self {
		Self { original, extra }
	}

	/// Returns a transform that wraps its input together with `extra`.
	///
	/// Meant for the `transform` option of [`register!`](crate::register).
	pub fn glue(extra: E) -> impl FnOnce(O) -> Self {
		move |original| Self { original, extra }
	}
}

/// Name held more or fewer than one value where exactly one was expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected exactly one value for `{name}`, found {count}")]
pub struct UniqueError {
	pub name: String,
	pub count: usize,
}

/// Unwraps an accumulated registry whose names are each expected to have a
/// single owner.
pub fn unique<T>(mapping: Registry<Vec<T>>) -> Result<Registry<T>, UniqueError> {
	mapping
		.into_iter()
		.map(|(name, values)| {
			let count = values.len();
			let mut values = values.into_iter();
			match (values.next(), values.next()) {
				(Some(value), None) => Ok((name, value)),
				_ => Err(UniqueError { name, count }),
			}
		})
		.collect()
}
