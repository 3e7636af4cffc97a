//! The editing and search session.

use std::fmt;

use gridpath_core::{Grid, GridConfig, Point};
use gridpath_search::{PathSearch, SearchConfig, SearchReport};

use crate::canvas::{Canvas, Paint};
use crate::error::{Result, SessionError};
use crate::layout::Layout;

/// Message shown after a successful run.
pub const PATH_FOUND: &str = "Path found!";
/// Message shown after a run that could not reach the end.
pub const NO_PATH: &str = "No path found.";

/// What a [`Session::press`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Press {
    /// The cell became the start.
    Start,
    /// The cell became the end.
    End,
    /// The cell became a barrier and a drag stroke began.
    Barrier,
    /// The cell is the start or the end and was left alone.
    Ignored,
}

/// A grid being edited and searched.
///
/// Presses first designate the start, then the end, then place barriers.
/// Dragging with a press held extends the barrier stroke. [`Session::run`]
/// searches from start to end, painting the result on the [`Canvas`].
pub struct Session {
    grid: Grid,
    search: PathSearch,
    canvas: Canvas,
    start: Option<Point>,
    end: Option<Point>,
    // drag stroke in progress
    dragging: bool,
    message: &'static str,
}

impl Session {
    pub fn new(config: GridConfig) -> Self {
        Self::with_search_config(config, SearchConfig::default())
    }

    pub fn with_search_config(config: GridConfig, search: SearchConfig) -> Self {
        let grid = Grid::from_config(&config);
        Self {
            search: PathSearch::with_config(grid.bounds(), search),
            canvas: Canvas::new(grid.cols(), grid.rows()),
            grid,
            start: None,
            end: None,
            dragging: false,
            message: "",
        }
    }

    /// Build a session from a text layout (see [`Layout`]).
    pub fn from_layout(text: &str) -> Result<Self> {
        Self::from_layout_with_config(text, SearchConfig::default())
    }

    pub fn from_layout_with_config(text: &str, search: SearchConfig) -> Result<Self> {
        let layout = Layout::parse(text)?;
        let mut session = Self::with_search_config(layout.config, search);
        for &p in &layout.barriers {
            session.set_barrier(p, true)?;
        }
        if let Some(p) = layout.start {
            session.designate_start(p)?;
        }
        if let Some(p) = layout.end {
            session.designate_end(p)?;
        }
        Ok(session)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn search(&self) -> &PathSearch {
        &self.search
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Outcome of the last run, or empty.
    #[inline]
    pub fn message(&self) -> &str {
        self.message
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn is_marker(&self, p: Point) -> bool {
        self.start == Some(p) || self.end == Some(p)
    }

    /// Press on a cell.
    pub fn press(&mut self, p: Point) -> Result<Press> {
        self.grid.cell_at(p)?;
        if self.start.is_none() {
            self.designate_start(p)?;
            return Ok(Press::Start);
        }
        if self.end.is_none() {
            self.designate_end(p)?;
            return Ok(Press::End);
        }
        if self.is_marker(p) {
            return Ok(Press::Ignored);
        }
        self.set_barrier(p, true)?;
        self.dragging = true;
        Ok(Press::Barrier)
    }

    /// Extend a drag stroke over `p`. Returns whether a new barrier was
    /// placed. Points outside the grid are ignored.
    pub fn drag(&mut self, p: Point) -> bool {
        if !self.dragging || !self.grid.contains(p) || self.is_marker(p) {
            return false;
        }
        if self.grid.is_barrier(p) {
            return false;
        }
        // in bounds and not a marker
        self.set_barrier(p, true).is_ok()
    }

    /// End the drag stroke.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Make `p` the start, moving it if one is already set.
    pub fn designate_start(&mut self, p: Point) -> Result<()> {
        self.check_free(p, self.end)?;
        if let Some(old) = self.start.replace(p) {
            self.canvas.paint(old, Paint::Empty);
        }
        self.canvas.paint(p, Paint::Start);
        log::debug!("start at {p}");
        Ok(())
    }

    /// Make `p` the end, moving it if one is already set.
    pub fn designate_end(&mut self, p: Point) -> Result<()> {
        self.check_free(p, self.start)?;
        if let Some(old) = self.end.replace(p) {
            self.canvas.paint(old, Paint::Empty);
        }
        self.canvas.paint(p, Paint::End);
        log::debug!("end at {p}");
        Ok(())
    }

    fn check_free(&self, p: Point, other: Option<Point>) -> Result<()> {
        if self.grid.cell_at(p)?.is_barrier() || other == Some(p) {
            return Err(SessionError::Occupied(p));
        }
        Ok(())
    }

    /// Place or remove a barrier. Start and end cannot become barriers.
    pub fn set_barrier(&mut self, p: Point, barrier: bool) -> Result<()> {
        self.grid.cell_at(p)?;
        if barrier && self.is_marker(p) {
            return Err(SessionError::Occupied(p));
        }
        self.grid.set_barrier(p, barrier)?;
        if barrier {
            self.canvas.paint(p, Paint::Barrier);
        } else if self.canvas.at(p) == Some(Paint::Barrier) {
            self.canvas.paint(p, Paint::Empty);
        }
        Ok(())
    }

    /// Search from start to end and paint the result.
    ///
    /// Returns `Ok(None)` without doing anything unless both start and end
    /// are set. Paint and message from a previous run are cleared first, so
    /// a rejected request leaves neither behind.
    pub fn run(&mut self) -> Result<Option<SearchReport>> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            log::debug!("run skipped: start or end missing");
            return Ok(None);
        };
        self.canvas.clear_search();
        self.message = "";
        let report = self
            .search
            .run(&self.grid, start, end, &mut self.canvas)?;
        self.message = if report.is_found() { PATH_FOUND } else { NO_PATH };
        match report.path() {
            Some(path) => log::info!(
                "{} {} -> {}: {} hops, {} cells visited",
                self.message,
                start,
                end,
                path.hops(),
                report.visited
            ),
            None => log::info!(
                "{} {} -> {}: {} cells visited",
                self.message,
                start,
                end,
                report.visited
            ),
        }
        Ok(Some(report))
    }

    /// Drop start and end, rebuild the grid, forget the last run and wipe
    /// the canvas.
    pub fn clear(&mut self) {
        self.grid.reset();
        self.search.reset();
        self.canvas.clear();
        self.start = None;
        self.end = None;
        self.dragging = false;
        self.message = "";
    }

    /// The grid's edit state as a text layout, without search paint.
    pub fn to_layout(&self) -> String {
        let mut canvas = self.canvas.clone();
        canvas.clear_search();
        canvas.render()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canvas)?;
        if !self.message.is_empty() {
            write!(f, "\n{}", self.message)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("bounds", &self.grid.bounds())
            .field("start", &self.start)
            .field("end", &self.end)
            .field("barriers", &self.grid.barrier_count())
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_search::{InvalidRequest, SearchError};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn press_sequence() {
        let mut s = Session::new(GridConfig::new(4, 1));
        assert_eq!(s.press(p(0, 0)), Ok(Press::Start));
        assert_eq!(s.press(p(3, 0)), Ok(Press::End));
        assert_eq!(s.press(p(0, 0)), Ok(Press::Ignored));
        assert!(!s.is_dragging());
        assert_eq!(s.press(p(1, 0)), Ok(Press::Barrier));
        assert!(s.is_dragging());
        assert!(s.drag(p(2, 0)));
        assert!(!s.drag(p(2, 0)));
        assert!(!s.drag(p(3, 0)));
        assert!(!s.drag(p(7, 0)));
        s.release();
        assert!(!s.drag(p(2, 0)));
        assert_eq!(s.canvas().render(), "S##E");
        assert!(!s.grid().is_barrier(p(3, 0)));
    }

    #[test]
    fn press_out_of_bounds() {
        let mut s = Session::new(GridConfig::new(2, 2));
        assert!(matches!(s.press(p(2, 0)), Err(SessionError::Grid(_))));
        assert_eq!(s.start(), None);
    }

    #[test]
    fn drag_without_press_does_nothing() {
        let mut s = Session::new(GridConfig::new(3, 3));
        assert!(!s.drag(p(1, 1)));
        assert_eq!(s.grid().barrier_count(), 0);
    }

    #[test]
    fn markers_and_barriers_exclusive() {
        let mut s = Session::new(GridConfig::new(3, 3));
        s.set_barrier(p(1, 1), true).unwrap();
        assert_eq!(
            s.designate_start(p(1, 1)),
            Err(SessionError::Occupied(p(1, 1)))
        );
        s.designate_start(p(0, 0)).unwrap();
        assert_eq!(
            s.designate_end(p(0, 0)),
            Err(SessionError::Occupied(p(0, 0)))
        );
        assert_eq!(
            s.set_barrier(p(0, 0), true),
            Err(SessionError::Occupied(p(0, 0)))
        );
        s.set_barrier(p(1, 1), false).unwrap();
        s.designate_end(p(1, 1)).unwrap();
        assert_eq!(s.canvas().at(p(1, 1)), Some(Paint::End));
    }

    #[test]
    fn moving_start_repaints() {
        let mut s = Session::new(GridConfig::new(3, 1));
        s.designate_start(p(0, 0)).unwrap();
        s.designate_start(p(1, 0)).unwrap();
        assert_eq!(s.canvas().render(), ".S.");
        assert_eq!(s.start(), Some(p(1, 0)));
    }

    #[test]
    fn run_needs_both_markers() {
        let mut s = Session::new(GridConfig::new(3, 1));
        assert_eq!(s.run(), Ok(None));
        s.press(p(0, 0)).unwrap();
        assert_eq!(s.run(), Ok(None));
        assert_eq!(s.message(), "");
    }

    #[test]
    fn run_found_and_not_found() {
        let mut s = Session::new(GridConfig::new(3, 1));
        s.press(p(0, 0)).unwrap();
        s.press(p(2, 0)).unwrap();
        let report = s.run().unwrap().unwrap();
        assert_eq!(report.path().map(|path| path.intermediate()), Some(&[p(1, 0)][..]));
        assert_eq!(s.message(), PATH_FOUND);
        assert_eq!(s.to_string(), "S*E\nPath found!");

        s.set_barrier(p(1, 0), true).unwrap();
        let report = s.run().unwrap().unwrap();
        assert!(!report.is_found());
        assert_eq!(s.message(), NO_PATH);
        assert_eq!(s.to_string(), "S#E\nNo path found.");
    }

    #[test]
    fn search_errors_surface() {
        let mut s = Session::new(GridConfig::new(1, 1));
        s.designate_start(p(0, 0)).unwrap();
        // bypass designate_end, which refuses the start cell
        s.end = Some(p(0, 0));
        assert_eq!(
            s.run(),
            Err(SessionError::Search(SearchError::InvalidRequest(
                InvalidRequest::SameCell(p(0, 0))
            )))
        );
    }

    #[test]
    fn rejected_run_drops_stale_message() {
        let mut s = Session::from_layout("S.E").unwrap();
        s.run().unwrap();
        assert_eq!(s.message(), PATH_FOUND);
        s.end = Some(p(0, 0));
        assert!(s.run().is_err());
        assert_eq!(s.message(), "");
        assert_eq!(s.canvas().count(Paint::Path), 0);
    }

    #[test]
    fn clear_forgets_last_run() {
        let mut s = Session::from_layout("S.E").unwrap();
        s.run().unwrap();
        assert_eq!(s.search().distance_at(p(2, 0)), Some(2));
        s.clear();
        assert_eq!(s.search().distance_at(p(2, 0)), None);
        assert_eq!(s.search().predecessor_at(p(2, 0)), None);
        assert!(!s.search().is_finalized(p(0, 0)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = Session::from_layout("S#.\n..E").unwrap();
        s.run().unwrap();
        s.clear();
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), None);
        assert_eq!(s.message(), "");
        assert_eq!(s.grid().barrier_count(), 0);
        assert_eq!(s.to_string(), "...\n...");
        assert_eq!(s.press(p(2, 1)), Ok(Press::Start));
    }

    #[test]
    fn layout_round_trip() {
        let text = "S..#\n.#..\n...E";
        let mut s = Session::from_layout(text).unwrap();
        assert_eq!(s.to_layout(), text);
        s.run().unwrap();
        assert_eq!(s.to_layout(), text);
    }

    #[test]
    fn layout_errors_wrap() {
        assert!(matches!(
            Session::from_layout("S.\n..."),
            Err(SessionError::Layout(_))
        ));
    }
}
