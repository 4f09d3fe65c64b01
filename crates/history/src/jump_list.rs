//! Linear back/forward history of cursor positions.

use waymark_primitives::Position;

/// Bounded back/forward history of recorded positions for one view.
///
/// A linear undo/redo-style list: navigating back and then recording a new
/// position permanently discards the abandoned forward branch. Navigation
/// intent is linear within a session, so a tree is not worth the
/// complexity.
#[derive(Debug, Clone, Default)]
pub struct JumpList {
	/// Recorded positions, oldest first.
	positions: Vec<Position>,
	/// Index of the current entry. `None` exactly when the list is empty.
	index: Option<usize>,
}

impl JumpList {
	/// Maximum number of positions to remember.
	const MAX_JUMPS: usize = 100;

	/// Records `position` as the new current entry.
	///
	/// Truncates any forward history first, then appends. When the list is
	/// full the oldest entry is evicted.
	pub fn push(&mut self, position: Position) {
		let keep = self.index.map_or(0, |i| i + 1);
		self.positions.truncate(keep);
		self.positions.push(position);

		if self.positions.len() > Self::MAX_JUMPS {
			self.positions.remove(0);
		}
		self.index = Some(self.positions.len() - 1);
	}

	/// Steps backward, returning the new current position.
	///
	/// Returns `None` at the oldest entry (or when empty) without mutating
	/// anything.
	pub fn go_back(&mut self) -> Option<Position> {
		let i = self.index?;
		if i == 0 {
			return None;
		}
		self.index = Some(i - 1);
		Some(self.positions[i - 1])
	}

	/// Steps forward, returning the new current position.
	///
	/// Returns `None` at the newest entry (or when empty) without mutating
	/// anything.
	pub fn go_forward(&mut self) -> Option<Position> {
		let i = self.index?;
		if i + 1 >= self.positions.len() {
			return None;
		}
		self.index = Some(i + 1);
		Some(self.positions[i + 1])
	}

	/// Returns the current entry, if any.
	pub fn current(&self) -> Option<Position> {
		self.index.map(|i| self.positions[i])
	}

	/// Number of recorded positions.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// Returns true when nothing has been recorded.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}
