//! Cursor position types.

use std::fmt;

/// A cursor position as (line, column), both zero-based and measured in
/// characters.
///
/// Ordering is only meaningful between positions taken from the same
/// document version; the host owns that versioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
	/// Zero-based line number.
	pub line: usize,
	/// Zero-based column within the line.
	pub column: usize,
}

impl Position {
	/// The start of the document.
	pub const ORIGIN: Position = Position { line: 0, column: 0 };

	/// Creates a new position.
	pub fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_is_line_colon_column() {
		assert_eq!(Position::new(12, 4).to_string(), "12:4");
	}

	#[test]
	fn ordering_is_line_major() {
		assert!(Position::new(1, 0) < Position::new(2, 0));
		assert!(Position::new(3, 2) < Position::new(3, 7));
	}
}
