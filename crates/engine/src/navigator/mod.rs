//! Per-view navigation orchestration.
//!
//! The navigator sits between the host's cursor-change feed and the
//! per-view jump lists. Every observed movement is classified against the
//! view's last known position; only significant jumps are recorded. When a
//! back/forward command restores a position, the expected echo event is
//! remembered on the target view and discarded when it arrives, so a
//! restoration is never mistaken for a fresh user movement. Scoping the
//! token to the view (instead of one process-wide flag) means a
//! restoration in one view can never swallow a genuine movement in
//! another.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};
use waymark_history::{JumpList, JumpThresholds};
use waymark_primitives::{NavDirection, Position, ViewId};

use crate::host::Host;
use crate::notifications::{Notification, NotificationCenter};

/// Navigation state for one open view.
#[derive(Debug, Default)]
struct ViewNavState {
	/// Recorded jump history.
	jumps: JumpList,
	/// Most recently observed position, the baseline for significance
	/// checks. Updated on every event, recorded or not.
	last_position: Option<Position>,
	/// Position we asked the host to restore, awaiting its echo event.
	pending_restore: Option<Position>,
}

/// Drives back/forward cursor navigation across open views.
///
/// Single-threaded and event-driven: the host calls
/// [`handle_cursor_moved`] for every cursor change,
/// [`handle_view_closed`] when a view goes away, and
/// [`navigate_back`]/[`navigate_forward`] on user command. Exhausted
/// history is a normal outcome surfaced through the notification queue,
/// never an error.
///
/// [`handle_cursor_moved`]: Self::handle_cursor_moved
/// [`handle_view_closed`]: Self::handle_view_closed
/// [`navigate_back`]: Self::navigate_back
/// [`navigate_forward`]: Self::navigate_forward
#[derive(Debug, Default)]
pub struct Navigator {
	views: FxHashMap<ViewId, ViewNavState>,
	thresholds: JumpThresholds,
	notifications: NotificationCenter,
}

impl Navigator {
	/// Creates a navigator with default jump thresholds.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a navigator with custom jump thresholds.
	pub fn with_thresholds(thresholds: JumpThresholds) -> Self {
		Self {
			thresholds,
			..Self::default()
		}
	}

	/// The thresholds used to classify movements.
	pub fn thresholds(&self) -> JumpThresholds {
		self.thresholds
	}

	/// Observes a cursor change in `view`.
	///
	/// View state is created lazily on the first event, and the very first
	/// position of a view is always recorded since there is no baseline to
	/// compare against.
	pub fn handle_cursor_moved(&mut self, view: ViewId, position: Position) {
		let state = self.views.entry(view).or_default();

		if let Some(expected) = state.pending_restore.take() {
			if expected == position {
				trace!(%view, %position, "restoration echo discarded");
				state.last_position = Some(position);
				return;
			}
			// The expected echo never arrived; whatever did arrive is a
			// genuine movement.
			debug!(%view, %expected, %position, "pending restoration overtaken");
		}

		let record = match state.last_position {
			None => true,
			Some(last) => self.thresholds.is_significant(last, position),
		};

		if record {
			state.jumps.push(position);
			debug!(%view, %position, jumps = state.jumps.len(), "jump recorded");
		} else {
			trace!(%view, %position, "movement below thresholds");
		}
		state.last_position = Some(position);
	}

	/// Drops all state for a closed view.
	pub fn handle_view_closed(&mut self, view: ViewId) {
		if self.views.remove(&view).is_some() {
			debug!(%view, "view history dropped");
		}
	}

	/// Steps the active view's history backward. See [`navigate`].
	///
	/// [`navigate`]: Self::navigate
	pub fn navigate_back(&mut self, host: &mut impl Host) -> bool {
		self.navigate(host, NavDirection::Back)
	}

	/// Steps the active view's history forward. See [`navigate`].
	///
	/// [`navigate`]: Self::navigate
	pub fn navigate_forward(&mut self, host: &mut impl Host) -> bool {
		self.navigate(host, NavDirection::Forward)
	}

	/// Steps the active view's history in `direction`.
	///
	/// On success, asks the host to move the cursor there and returns true;
	/// the echo of that move is discarded when it arrives. With no active
	/// view nothing happens; with history exhausted in `direction` an
	/// informational notification is queued. Neither case is an error.
	pub fn navigate(&mut self, host: &mut impl Host, direction: NavDirection) -> bool {
		let Some(view) = host.active_view() else {
			trace!(direction = direction.label(), "navigate with no active view");
			return false;
		};

		let target = self.views.get_mut(&view).and_then(|state| {
			let target = match direction {
				NavDirection::Back => state.jumps.go_back(),
				NavDirection::Forward => state.jumps.go_forward(),
			};
			if let Some(position) = target {
				state.pending_restore = Some(position);
			}
			target
		});

		let Some(position) = target else {
			debug!(%view, direction = direction.label(), "no further history");
			self.notifications.push(Notification::info(format!(
				"No further {} navigation history for this view.",
				direction.label()
			)));
			return false;
		};

		debug!(%view, %position, direction = direction.label(), "navigating");
		host.move_cursor_and_reveal(view, position);
		true
	}

	/// Drains notifications queued for the frontend.
	pub fn take_notifications(&mut self) -> Vec<Notification> {
		self.notifications.take_pending()
	}

	/// Number of views with tracked history.
	pub fn view_count(&self) -> usize {
		self.views.len()
	}

	/// Releases all per-view state and pending notifications.
	///
	/// Called when the host tears the navigation feature down.
	pub fn clear(&mut self) {
		self.views.clear();
		self.notifications.clear();
	}
}
