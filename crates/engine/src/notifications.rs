//! Notification queue for frontend presentation.
//!
//! The navigator queues typed notifications; frontend layers drain them
//! and own toast lifecycle, visual mapping, and rendering.

use std::collections::VecDeque;

/// Severity level for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
	/// Informational message (default).
	#[default]
	Info,
	/// Warning message.
	Warn,
	/// Error message.
	Error,
}

/// A message ready for frontend display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	/// Severity level.
	pub level: Level,
	/// The formatted message content.
	pub message: String,
}

impl Notification {
	/// Creates an informational notification.
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			level: Level::Info,
			message: message.into(),
		}
	}
}

/// FIFO queue of notifications awaiting presentation.
#[derive(Debug, Default)]
pub struct NotificationCenter {
	pending: VecDeque<Notification>,
}

impl NotificationCenter {
	/// Returns true when nothing is queued.
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Queues a notification.
	pub fn push(&mut self, notification: Notification) {
		self.pending.push_back(notification);
	}

	/// Drains all queued notifications in arrival order.
	pub fn take_pending(&mut self) -> Vec<Notification> {
		self.pending.drain(..).collect()
	}

	/// Discards everything queued.
	pub fn clear(&mut self) {
		self.pending.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn take_pending_drains_in_arrival_order() {
		let mut center = NotificationCenter::default();
		center.push(Notification::info("first"));
		center.push(Notification::info("second"));

		let pending = center.take_pending();
		assert_eq!(pending.len(), 2);
		assert_eq!(pending[0].message, "first");
		assert_eq!(pending[1].message, "second");
		assert!(center.is_empty());
	}
}
