//! Error types for search requests.

use gridpath_core::{GridError, Point};

/// Result type alias
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors rejecting a search before it starts.
///
/// An unreachable end is not an error; it is reported as
/// [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Start or end lies outside the grid
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Start/end combination the search cannot run on
    #[error("invalid search request: {0}")]
    InvalidRequest(#[from] InvalidRequest),
}

/// Why a search request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRequest {
    #[error("start and end are the same cell {0}")]
    SameCell(Point),

    #[error("start {0} is a barrier")]
    StartIsBarrier(Point),

    #[error("end {0} is a barrier")]
    EndIsBarrier(Point),
}
