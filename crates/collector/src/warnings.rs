//! Scoped warning filters.
//!
//! Warnings are emitted through `tracing`. An [`ignore`] guard pushes a filter
//! for the current thread; while it is alive, warnings of that category are
//! demoted to debug records. Dropping the guard restores the filter stack to
//! the depth it had when the guard was created, whichever way the scope exits.

use std::cell::RefCell;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	/// Use of a deprecated declaration form.
	Deprecation,
}

impl core::fmt::Display for Category {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Deprecation => write!(f, "deprecation"),
		}
	}
}

thread_local! {
	static FILTERS: RefCell<Vec<Category>> = const { RefCell::new(Vec::new()) };
}

/// Suppression scope returned by [`ignore`].
#[must_use = "the filter is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct Ignore {
	depth: usize,
	_not_send: PhantomData<*const ()>,
}

impl Drop for Ignore {
	fn drop(&mut self) {
		FILTERS.with_borrow_mut(|filters| filters.truncate(self.depth));
	}
}

/// Suppresses `category` on this thread until the guard is dropped.
pub fn ignore(category: Category) -> Ignore {
	FILTERS.with_borrow_mut(|filters| {
		let depth = filters.len();
		filters.push(category);
		Ignore {
			depth,
			_not_send: PhantomData,
		}
	})
}

pub fn is_ignored(category: Category) -> bool {
	FILTERS.with_borrow(|filters| filters.contains(&category))
}

/// Emits a warning unless its category is currently suppressed.
pub fn warn(category: Category, message: &str) {
	if is_ignored(category) {
		tracing::debug!(%category, "suppressed warning: {message}");
	} else {
		tracing::warn!(%category, "{message}");
	}
}
