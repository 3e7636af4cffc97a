//! Unweighted shortest-path search over *gridpath* grids.
//!
//! [`PathSearch`] runs a uniform-cost (Dijkstra) search with unit edge
//! weights from a start cell to an end cell, finalizing cells in order of
//! distance from the start. Ties are broken by the order in which cells
//! acquired their distance, then by grid insertion order, so the sequence of
//! finalized cells is fully deterministic.
//!
//! - [`PathSearch::run`] performs a search and reports a [`SearchOutcome`]
//! - [`SearchObserver`] receives visited / found / not-found events
//! - [`PathSearch::backtrack`] lazily walks predecessor links from the end
//! - [`FrontierKind`] selects a linear-scan or binary-heap working set;
//!   both produce identical results
//!
//! Any type implementing [`Pather`] can be searched; [`Grid`] does out of
//! the box.
//!
//! [`Grid`]: gridpath_core::Grid

mod dijkstra;
mod distance;
mod error;
mod frontier;
mod observer;
mod path;
mod search;
mod traits;

pub use distance::manhattan;
pub use error::{InvalidRequest, Result, SearchError};
pub use frontier::FrontierKind;
pub use observer::{SearchObserver, VisitLog};
pub use path::{Backtrack, Path};
pub use search::{PathNode, PathSearch, SearchConfig, SearchOutcome, SearchReport, UNREACHABLE};
pub use traits::Pather;
