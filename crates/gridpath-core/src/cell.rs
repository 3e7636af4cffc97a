//! [`Cell`]: one addressable grid position.

use crate::geom::Point;

/// A grid cell: fixed coordinates plus a passability flag.
///
/// Search distances and predecessors are not stored here; they belong to
/// the search that produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    barrier: bool,
}

impl Cell {
    /// A passable cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            barrier: false,
        }
    }

    /// Set the barrier flag (builder).
    #[inline]
    pub const fn with_barrier(mut self, barrier: bool) -> Self {
        self.barrier = barrier;
        self
    }

    /// Coordinates of the cell. Never changes after construction.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Whether the cell is impassable.
    #[inline]
    pub const fn is_barrier(&self) -> bool {
        self.barrier
    }

    #[inline]
    pub(crate) fn set_barrier(&mut self, barrier: bool) {
        self.barrier = barrier;
    }
}
