//! Significance policy for cursor movements.

use serde::{Deserialize, Serialize};
use waymark_primitives::Position;

/// Invalid threshold configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdsError {
	#[error("jump thresholds must be non-zero (lines: {lines}, columns: {columns})")]
	ZeroThreshold { lines: usize, columns: usize },
}

/// Minimum movement deltas for a cursor change to be recorded.
///
/// A movement is significant when **either** delta meets its threshold, so
/// a large purely horizontal jump counts as much as a vertical one. The
/// defaults are biased toward ignoring incidental drift (arrow keys,
/// typing) while capturing intentional jumps (search results,
/// go-to-definition, far scrolls).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpThresholds {
	/// Minimum absolute line delta.
	pub lines: usize,
	/// Minimum absolute column delta.
	pub columns: usize,
}

impl Default for JumpThresholds {
	fn default() -> Self {
		Self {
			lines: 5,
			columns: 10,
		}
	}
}

impl JumpThresholds {
	/// Rejects zero thresholds, which would record every single movement.
	pub fn validate(&self) -> Result<(), ThresholdsError> {
		if self.lines == 0 || self.columns == 0 {
			return Err(ThresholdsError::ZeroThreshold {
				lines: self.lines,
				columns: self.columns,
			});
		}
		Ok(())
	}

	/// Returns true when moving from `prev` to `next` crosses either
	/// threshold. Boundaries are inclusive.
	pub fn is_significant(&self, prev: Position, next: Position) -> bool {
		let line_delta = prev.line.abs_diff(next.line);
		let column_delta = prev.column.abs_diff(next.column);
		line_delta >= self.lines || column_delta >= self.columns
	}
}
