//! Directional types for history traversal.

/// Direction of travel through a view's navigation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
	/// Toward older recorded positions.
	Back,
	/// Toward newer recorded positions.
	Forward,
}

impl NavDirection {
	/// Lowercase label for messages and logs.
	pub fn label(self) -> &'static str {
		match self {
			NavDirection::Back => "back",
			NavDirection::Forward => "forward",
		}
	}
}
