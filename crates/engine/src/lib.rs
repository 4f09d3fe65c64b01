//! Navigation engine.
//!
//! [`Navigator`] owns one jump list per open view, classifies every
//! observed cursor movement, and drives back/forward restoration through a
//! [`Host`]. The host delivers cursor events and view lifecycle by calling
//! into the navigator; the navigator calls back out only to move the
//! cursor and to queue notifications.

/// Host boundary driven by the navigator.
pub mod host;
/// Per-view navigation orchestration.
pub mod navigator;
/// Notification queue for frontend presentation.
pub mod notifications;

pub use host::Host;
pub use navigator::Navigator;
pub use notifications::{Level, Notification, NotificationCenter};
