//! Error types for sessions and text layouts.

use gridpath_core::{GridError, Point};
use gridpath_search::SearchError;

/// Result type alias
pub type Result<T> = std::result::Result<T, SessionError>;

/// Session edit and run errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Coordinate outside the grid
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Search rejected the request
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Edit would put start, end and barriers on the same cell
    #[error("cell {0} is already taken")]
    Occupied(Point),

    /// Text layout could not be parsed
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Text layout parse errors. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,

    #[error("line {line} has {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at line {line}, column {column}")]
    UnknownGlyph {
        line: usize,
        column: usize,
        glyph: char,
    },

    #[error("marker {0:?} appears more than once")]
    DuplicateMarker(char),
}
