//! Identifier types for host entities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for one open view (editor pane).
///
/// Opaque for the lifetime the view is open; the host decides what a view
/// actually is. Hosts with their own identity scheme can construct ids
/// directly from the wrapped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

impl ViewId {
	/// Generates a new unique view ID.
	pub fn next() -> Self {
		Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
	}
}

impl fmt::Display for ViewId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "view{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn next_ids_are_unique() {
		let a = ViewId::next();
		let b = ViewId::next();
		assert_ne!(a, b);
	}
}
