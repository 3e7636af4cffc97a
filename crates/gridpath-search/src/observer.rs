//! Search event hooks.

use gridpath_core::Point;

use crate::path::Path;

/// Receives search events in the order the search produces them.
///
/// Every method has an empty default, so implementors pick the events they
/// care about. `()` ignores everything.
pub trait SearchObserver {
    /// A cell was finalized at `distance` hops from the start. Not called
    /// for the start or the end cell.
    fn visited(&mut self, _p: Point, _distance: u32) {}

    /// The end was reached.
    fn found(&mut self, _path: &Path) {}

    /// The working set ran out of reachable cells before the end.
    fn not_found(&mut self) {}
}

impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn visited(&mut self, p: Point, distance: u32) {
        (**self).visited(p, distance);
    }

    fn found(&mut self, path: &Path) {
        (**self).found(path);
    }

    fn not_found(&mut self) {
        (**self).not_found();
    }
}

/// Observer that records every event, for replay or inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitLog {
    /// Finalized cells with their distances, in order.
    pub visited: Vec<(Point, u32)>,
    /// `Some(true)` after `found`, `Some(false)` after `not_found`.
    pub found: Option<bool>,
}

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited points without distances.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.visited.iter().map(|&(p, _)| p)
    }
}

impl SearchObserver for VisitLog {
    fn visited(&mut self, p: Point, distance: u32) {
        self.visited.push((p, distance));
    }

    fn found(&mut self, _path: &Path) {
        self.found = Some(true);
    }

    fn not_found(&mut self) {
        self.found = Some(false);
    }
}
