use gridpath_core::{Grid, Point, Range};

/// Pathfinding interface: bounds, passability and neighbor enumeration.
///
/// Table indices are column-major within [`bounds`](Pather::bounds), so a
/// pather whose bounds start at the origin shares [`Grid::index`]'s order.
pub trait Pather {
    /// Rectangle the search is confined to.
    fn bounds(&self) -> Range;

    /// Whether `p` can be entered. Called only for points inside `bounds`.
    fn passable(&self, p: Point) -> bool;

    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// The default yields passable in-bounds cardinal neighbors in the
    /// order left, right, up, down.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let bounds = self.bounds();
        for n in p.cardinal() {
            if bounds.contains(n) && self.passable(n) {
                buf.push(n);
            }
        }
    }
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        !self.is_barrier(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Grid::neighbors(self, p).filter(|&n| !self.is_barrier(n)));
    }
}
