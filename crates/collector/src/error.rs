use crate::scan::ImportFailure;
use crate::strategy::Collision;

/// Failure of a collection pass.
#[derive(Debug)]
pub enum CollectError<T> {
	/// Reported by the strategy, raised after the scan finished.
	Collision(Collision<T>),
	/// A discovered module failed to load for a reason other than absence.
	Import(ImportFailure),
	/// A registration tagged for this collector holds a value of another type.
	TypeMismatch {
		name: &'static str,
		module: &'static str,
		expected: &'static str,
	},
}

impl<T> CollectError<T> {
	/// Returns the collision, if that is what ended the pass.
	pub fn collision(&self) -> Option<&Collision<T>> {
		match self {
			Self::Collision(collision) => Some(collision),
			_ => None,
		}
	}
}

impl<T> From<ImportFailure> for CollectError<T> {
	fn from(failure: ImportFailure) -> Self {
		Self::Import(failure)
	}
}

impl<T> From<Collision<T>> for CollectError<T> {
	fn from(collision: Collision<T>) -> Self {
		Self::Collision(collision)
	}
}

impl<T> core::fmt::Display for CollectError<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Collision(collision) => write!(f, "collection failed: {collision}"),
			Self::Import(failure) => write!(f, "collection failed: {failure}"),
			Self::TypeMismatch {
				name,
				module,
				expected,
			} => write!(f, "registration `{name}` in `{module}` does not hold a `{expected}`"),
		}
	}
}

impl<T: core::fmt::Debug + 'static> std::error::Error for CollectError<T> {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Collision(collision) => Some(collision),
			Self::Import(failure) => Some(failure),
			Self::TypeMismatch { .. } => None,
		}
	}
}
