//! The [`Canvas`] paint layer and its text rendering.

use std::fmt;

use gridpath_core::{Point, Range};
use gridpath_search::{Path, SearchObserver};

/// What a cell is drawn as.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paint {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    Visited,
    Path,
}

impl Paint {
    /// Text glyph used by [`Canvas::render`].
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Barrier => '#',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }

    /// Whether the paint only reflects a search result.
    pub const fn is_search_result(self) -> bool {
        matches!(self, Self::Visited | Self::Path)
    }
}

/// A per-cell paint buffer, row-major, sized like the grid it shows.
///
/// A `Canvas` is also a [`SearchObserver`]: visited cells are painted as
/// they are finalized and, on success, the intermediate path cells are
/// painted over them. Start and end are never overdrawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Paint>,
    bounds: Range,
}

impl Canvas {
    /// A blank canvas of `cols × rows` cells.
    pub fn new(cols: i32, rows: i32) -> Self {
        let bounds = Range::with_size(cols, rows);
        Self {
            cells: vec![Paint::Empty; bounds.len()],
            bounds,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    /// Paint at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Paint> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Paint a cell. No-op if `p` is outside bounds.
    pub fn paint(&mut self, p: Point, paint: Paint) {
        if let Some(i) = self.index(p) {
            self.cells[i] = paint;
        }
    }

    /// Reset every cell to [`Paint::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(Paint::Empty);
    }

    /// Turn visited and path cells back to empty, keeping start, end and
    /// barriers.
    pub fn clear_search(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_search_result() {
                *c = Paint::Empty;
            }
        }
    }

    /// How many cells carry `paint`.
    pub fn count(&self, paint: Paint) -> usize {
        self.cells.iter().filter(|&&c| c == paint).count()
    }

    /// Render as text, one glyph per cell and one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn paint_search(&mut self, p: Point, paint: Paint) {
        if !matches!(self.at(p), Some(Paint::Start | Paint::End)) {
            self.paint(p, paint);
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.bounds.width().max(0) as usize;
        if w == 0 {
            return Ok(());
        }
        for (y, row) in self.cells.chunks(w).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
        }
        Ok(())
    }
}

impl SearchObserver for Canvas {
    fn visited(&mut self, p: Point, _distance: u32) {
        self.paint_search(p, Paint::Visited);
    }

    fn found(&mut self, path: &Path) {
        for &p in path.intermediate() {
            self.paint_search(p, Paint::Path);
        }
    }
}
