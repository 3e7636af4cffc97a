//! [`Grid`]: a fixed-size rectangle of [`Cell`]s.
//!
//! Cells are stored column-major: index `x * rows + y`. That is the order in
//! which the grid is built, and searches fall back on it to break ties
//! between cells that are otherwise equally close.

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::geom::{Point, Range};

/// A `cols × rows` grid owning every [`Cell`] in it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid with every cell passable. Non-positive dimensions
    /// produce an empty grid.
    pub fn new(cols: i32, rows: i32) -> Self {
        let bounds = Range::with_size(cols, rows);
        Self {
            cells: build_cells(bounds),
            bounds,
        }
    }

    /// Create a grid with the dimensions in `config`.
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.cols, config.rows)
    }

    /// The bounding range `[0, cols) × [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns (width).
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows (height).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat column-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize * self.rows() as usize + p.y as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let rows = self.rows() as usize;
        Point::new((idx / rows) as i32, (idx % rows) as i32)
    }

    /// The cell at `p`.
    pub fn cell_at(&self, p: Point) -> Result<&Cell> {
        let idx = self.checked_index(p)?;
        Ok(&self.cells[idx])
    }

    /// The cell at `(x, y)`.
    pub fn cell_at_xy(&self, x: i32, y: i32) -> Result<&Cell> {
        self.cell_at(Point::new(x, y))
    }

    /// Whether `p` is a barrier. Out-of-bounds points are reported as
    /// barriers, since nothing can pass through them either.
    #[inline]
    pub fn is_barrier(&self, p: Point) -> bool {
        self.index(p).is_none_or(|i| self.cells[i].is_barrier())
    }

    /// Mark or clear the barrier flag of the cell at `p`.
    pub fn set_barrier(&mut self, p: Point, barrier: bool) -> Result<()> {
        let idx = self.checked_index(p)?;
        self.cells[idx].set_barrier(barrier);
        Ok(())
    }

    /// In-bounds orthogonal neighbours of `p`, in the order left, right,
    /// up, down. Barriers are included; filtering is up to the caller.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.cardinal().into_iter().filter(|&n| self.contains(n))
    }

    /// Count of barrier cells.
    pub fn barrier_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_barrier()).count()
    }

    /// Iterate over every cell in insertion (column-major) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Discard every cell and rebuild the grid with the same dimensions.
    ///
    /// Any start/end designation held by the caller is stale afterwards.
    pub fn reset(&mut self) {
        log::debug!("resetting {}x{} grid", self.cols(), self.rows());
        self.cells = build_cells(self.bounds);
    }

    fn checked_index(&self, p: Point) -> Result<usize> {
        self.index(p).ok_or(GridError::OutOfBounds {
            point: p,
            cols: self.cols(),
            rows: self.rows(),
        })
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn build_cells(bounds: Range) -> Vec<Cell> {
    bounds.iter_columns().map(Cell::new).collect()
}

/// Unchecked wire form of [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<Cell>,
    bounds: Range,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self> {
        let GridRepr { cells, bounds } = repr;
        if bounds.min != Point::ZERO {
            return Err(GridError::Malformed("bounds must start at the origin"));
        }
        if cells.len() != bounds.len() {
            return Err(GridError::Malformed("cell count does not match bounds"));
        }
        if !cells.iter().map(Cell::pos).eq(bounds.iter_columns()) {
            return Err(GridError::Malformed("cells out of column-major order"));
        }
        Ok(Self { cells, bounds })
    }
}
