//! Host boundary driven by the navigator.

use waymark_primitives::{Position, ViewId};

/// Editing host the [`Navigator`] issues calls against.
///
/// Inbound traffic (cursor events, view lifecycle) arrives as direct calls
/// on the navigator; this trait covers the outbound direction only.
///
/// [`Navigator`]: crate::Navigator
pub trait Host {
	/// Returns the view that currently has input focus, if any.
	fn active_view(&self) -> Option<ViewId>;

	/// Sets the cursor of `view` to `position` and scrolls the viewport so
	/// the target line sits in the vertical center.
	///
	/// The host must feed the resulting cursor-change event back through
	/// [`Navigator::handle_cursor_moved`] like any other movement; the
	/// navigator recognizes and discards its own echo.
	///
	/// [`Navigator::handle_cursor_moved`]: crate::Navigator::handle_cursor_moved
	fn move_cursor_and_reveal(&mut self, view: ViewId, position: Position);
}
