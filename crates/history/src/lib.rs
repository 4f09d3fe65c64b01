//! Navigation history: the per-view jump list and the significance policy
//! deciding which cursor movements are worth remembering.
//!
//! [`JumpList`] is a linear back/forward list with truncate-on-push
//! semantics, the same discipline as an editor undo stack.
//! [`JumpThresholds`] filters out incidental cursor drift so the list only
//! holds intentional jumps.

/// Linear back/forward history of cursor positions.
pub mod jump_list;
/// Significance policy for cursor movements.
pub mod thresholds;

pub use jump_list::JumpList;
pub use thresholds::{JumpThresholds, ThresholdsError};
