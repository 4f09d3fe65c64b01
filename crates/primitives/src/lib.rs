//! Core types for cursor navigation: positions, view identities, directions.

/// Directional types for history traversal.
pub mod direction;
/// Identifier types for host entities.
pub mod ids;
/// Cursor position types.
pub mod position;

pub use direction::NavDirection;
pub use ids::ViewId;
pub use position::Position;
