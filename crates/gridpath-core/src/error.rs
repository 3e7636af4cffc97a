//! Error types for grid access.

use crate::geom::Point;

/// Result type alias
pub type Result<T> = std::result::Result<T, GridError>;

/// Grid access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Coordinate outside `[0, cols) × [0, rows)`
    #[error("point {point} is outside the {cols}x{rows} grid")]
    OutOfBounds {
        /// Requested coordinate
        point: Point,
        /// Grid width
        cols: i32,
        /// Grid height
        rows: i32,
    },

    /// Deserialized cells do not cover the bounds once each, column-major
    #[error("malformed grid: {0}")]
    Malformed(&'static str),
}
