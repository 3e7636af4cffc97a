use gridpath_core::{Grid, Point, Range};

use crate::frontier::{Frontier, FrontierKind};
use crate::path::{Backtrack, Path};

/// A position with an associated distance, as finalized by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: u32,
}

/// Sentinel distance meaning "unreachable" (+infinity).
pub const UNREACHABLE: u32 = u32::MAX;

/// Sentinel predecessor meaning "none".
pub(crate) const NONE: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell transient state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) dist: u32,
    pub(crate) parent: usize,
    /// Finalization round during which `dist` was last assigned.
    pub(crate) round: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: UNREACHABLE,
            parent: NONE,
            round: 0,
            closed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration and results
// ---------------------------------------------------------------------------

/// Search settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub frontier: FrontierKind,
}

/// Whether the end was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Found(Path),
    NoPath,
}

/// Result of one [`PathSearch::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Cells finalized, start and (when found) end included.
    pub visited: usize,
    /// Successful relaxations.
    pub relaxations: usize,
}

impl SearchReport {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NoPath => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self.outcome {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NoPath => None,
        }
    }
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Shortest-path engine for one grid rectangle.
///
/// `PathSearch` owns the distance/predecessor table and the working set, so
/// repeated runs reuse their allocations. The table stays readable after a
/// run until the next one starts.
pub struct PathSearch {
    pub(crate) rng: Range,
    pub(crate) height: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) frontier: Frontier,
    pub(crate) order: Vec<usize>,
    pub(crate) relaxations: usize,
    // start index of the last run, NONE before any run
    pub(crate) source: usize,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathSearch {
    /// Create a search for the given rectangle with default settings.
    pub fn new(rng: Range) -> Self {
        Self::with_config(rng, SearchConfig::default())
    }

    /// Create a search for the given rectangle.
    pub fn with_config(rng: Range, config: SearchConfig) -> Self {
        Self {
            rng,
            height: rng.height().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            frontier: Frontier::new(config.frontier),
            order: Vec::new(),
            relaxations: 0,
            source: NONE,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create a search sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// Replace the underlying range. The table is cleared; its allocation
    /// is kept when the new range is not larger.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.height = rng.height().max(0) as usize;
        self.nodes.clear();
        self.nodes.resize(rng.len(), Node::default());
        self.order.clear();
        self.relaxations = 0;
        self.source = NONE;
    }

    /// Forget the last run, keeping the range.
    pub fn reset(&mut self) {
        self.set_range(self.rng);
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// The current settings.
    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            frontier: self.frontier.kind(),
        }
    }

    /// Switch working-set strategy for subsequent runs.
    pub fn set_frontier(&mut self, kind: FrontierKind) {
        if self.frontier.kind() != kind {
            self.frontier = Frontier::new(kind);
        }
    }

    // -----------------------------------------------------------------------
    // Queries on the last run
    // -----------------------------------------------------------------------

    /// Distance from the start to `p`, or `None` if `p` was not reached
    /// (or is outside the range).
    pub fn distance_at(&self, p: Point) -> Option<u32> {
        let d = self.nodes[self.idx(p)?].dist;
        (d != UNREACHABLE).then_some(d)
    }

    /// The cell `p` was reached from, if any.
    pub fn predecessor_at(&self, p: Point) -> Option<Point> {
        let parent = self.nodes[self.idx(p)?].parent;
        (parent != NONE).then(|| self.point(parent))
    }

    /// Whether `p` was finalized by the last run.
    pub fn is_finalized(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.nodes[i].closed)
    }

    /// Finalized cells in the order the last run finalized them, start
    /// first and (when found) end last.
    pub fn visited_order(&self) -> impl ExactSizeIterator<Item = PathNode> + '_ {
        self.order.iter().map(|&i| PathNode {
            pos: self.point(i),
            cost: self.nodes[i].dist,
        })
    }

    /// Lazily walk predecessor links back from `end`. See [`Backtrack`].
    pub fn backtrack(&self, end: Point) -> Backtrack<'_> {
        Backtrack::new(self, end)
    }

    /// Rebuild the path to `end` from the last run's table.
    ///
    /// `start` must be the start of the last run and `end` a different cell
    /// the run reached; otherwise `None`.
    pub fn path_to(&self, start: Point, end: Point) -> Option<Path> {
        if self.source == NONE || self.idx(start) != Some(self.source) || start == end {
            return None;
        }
        self.distance_at(end)?;
        let mut steps: Vec<Point> = self.backtrack(end).collect();
        steps.reverse();
        Some(Path::new(start, end, steps))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat column-major index. Returns `None` if out
    /// of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(x * self.height + y)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx / self.height) as i32 + self.rng.min.x;
        let y = (idx % self.height) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

impl std::fmt::Debug for PathSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathSearch")
            .field("range", &self.rng)
            .field("frontier", &self.frontier.kind())
            .field("finalized", &self.order.len())
            .finish()
    }
}
