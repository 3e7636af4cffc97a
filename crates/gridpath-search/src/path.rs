//! Path reconstruction: [`Path`] and the lazy [`Backtrack`] walk.

use gridpath_core::Point;

use crate::search::{NONE, PathSearch};

/// A shortest path found by [`PathSearch::run`].
///
/// `start` and `end` are kept apart from the intermediate cells, which are
/// stored in start-to-end order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    start: Point,
    end: Point,
    steps: Vec<Point>,
}

impl Path {
    pub(crate) fn new(start: Point, end: Point, steps: Vec<Point>) -> Self {
        Self { start, end, steps }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Cells strictly between start and end, start-ward first.
    #[inline]
    pub fn intermediate(&self) -> &[Point] {
        &self.steps
    }

    /// Number of edges walked from start to end. Equals the end's distance.
    #[inline]
    pub fn hops(&self) -> usize {
        self.steps.len() + 1
    }

    /// Every point on the path, start and end included.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start)
            .chain(self.steps.iter().copied())
            .chain(std::iter::once(self.end))
    }

    /// Whether `p` lies on the path (endpoints included).
    pub fn contains(&self, p: Point) -> bool {
        p == self.start || p == self.end || self.steps.contains(&p)
    }
}

/// Walks predecessor links back from an end cell.
///
/// Yields the intermediate cells end-ward to start-ward; neither the end
/// nor the start is yielded. Empty when the end was not reached by the
/// last run.
#[derive(Debug, Clone)]
pub struct Backtrack<'a> {
    search: &'a PathSearch,
    cur: usize,
}

impl<'a> Backtrack<'a> {
    pub(crate) fn new(search: &'a PathSearch, end: Point) -> Self {
        let cur = search
            .idx(end)
            .map(|i| search.nodes[i].parent)
            .unwrap_or(NONE);
        Self { search, cur }
    }
}

impl Iterator for Backtrack<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.cur == NONE {
            return None;
        }
        let parent = self.search.nodes[self.cur].parent;
        if parent == NONE {
            // Reached the start.
            self.cur = NONE;
            return None;
        }
        let p = self.search.point(self.cur);
        self.cur = parent;
        Some(p)
    }
}

impl std::iter::FusedIterator for Backtrack<'_> {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path::new(Point::new(3, 7), Point::new(3, 9), vec![Point::new(3, 8)]);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
