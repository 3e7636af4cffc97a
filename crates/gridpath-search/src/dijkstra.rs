use gridpath_core::{GridError, Point, Range};

use crate::error::{InvalidRequest, Result};
use crate::observer::SearchObserver;
use crate::path::Path;
use crate::search::{Node, PathSearch, SearchOutcome, SearchReport, UNREACHABLE};
use crate::traits::Pather;

impl PathSearch {
    /// Find a minimum-hop path from `start` to `end` over passable cells.
    ///
    /// Every cell starts at +infinity with no predecessor and `start` at 0.
    /// The working set yields the unfinalized cell with the smallest
    /// distance; ties go to the cell whose distance was assigned earliest,
    /// then to the lower column-major index. The run stops when `end` is
    /// finalized or when the smallest remaining distance is +infinity.
    ///
    /// `observer` sees each finalized cell except `start` and `end`, then
    /// exactly one of `found` / `not_found`. Pass `()` to ignore events.
    ///
    /// Rejected requests (endpoint outside the pather's bounds, identical
    /// endpoints, impassable endpoint) return an error and leave the
    /// previous run's table untouched.
    pub fn run<P, O>(
        &mut self,
        pather: &P,
        start: Point,
        end: Point,
        mut observer: O,
    ) -> Result<SearchReport>
    where
        P: Pather + ?Sized,
        O: SearchObserver,
    {
        let bounds = pather.bounds();
        check_bounds(bounds, start)?;
        check_bounds(bounds, end)?;
        if start == end {
            return Err(InvalidRequest::SameCell(start).into());
        }
        if !pather.passable(start) {
            return Err(InvalidRequest::StartIsBarrier(start).into());
        }
        if !pather.passable(end) {
            return Err(InvalidRequest::EndIsBarrier(end).into());
        }

        if bounds != self.rng {
            log::debug!("search range {} -> {}", self.rng, bounds);
            self.set_range(bounds);
        }
        let si = self.idx(start).ok_or(out_of_bounds(bounds, start))?;
        let ei = self.idx(end).ok_or(out_of_bounds(bounds, end))?;

        // Reset.
        for n in self.nodes.iter_mut() {
            *n = Node::default();
        }
        self.order.clear();
        self.relaxations = 0;
        self.source = si;

        log::debug!("search {start} -> {end} over {}", self.rng);

        self.nodes[si].dist = 0;
        self.frontier.seed(&self.nodes, si);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut round: u32 = 0;

        let found = loop {
            let Some(ci) = self.frontier.pop(&self.nodes) else {
                break false;
            };
            let current = self.nodes[ci];
            if current.dist == UNREACHABLE {
                break false;
            }

            self.nodes[ci].closed = true;
            self.order.push(ci);
            round += 1;

            if ci == ei {
                break true;
            }

            let cp = self.point(ci);
            if ci != si {
                log::trace!("finalized {cp} at {}", current.dist);
                observer.visited(cp, current.dist);
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            let candidate = current.dist + 1;
            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.closed || candidate >= n.dist {
                    continue;
                }
                n.dist = candidate;
                n.parent = ci;
                n.round = round;
                self.relaxations += 1;
                self.frontier.relaxed(&self.nodes, ni);
            }
        };

        self.nbuf = nbuf;

        let outcome = if found {
            let mut steps: Vec<Point> = self.backtrack(end).collect();
            steps.reverse();
            let path = Path::new(start, end, steps);
            log::debug!(
                "path found: {} hops, {} cells finalized",
                path.hops(),
                self.order.len()
            );
            observer.found(&path);
            SearchOutcome::Found(path)
        } else {
            log::debug!("no path: {} cells finalized", self.order.len());
            observer.not_found();
            SearchOutcome::NoPath
        };

        Ok(SearchReport {
            outcome,
            visited: self.order.len(),
            relaxations: self.relaxations,
        })
    }
}

fn out_of_bounds(bounds: Range, p: Point) -> GridError {
    GridError::OutOfBounds {
        point: p,
        cols: bounds.width(),
        rows: bounds.height(),
    }
}

fn check_bounds(bounds: Range, p: Point) -> std::result::Result<(), GridError> {
    if bounds.contains(p) {
        Ok(())
    } else {
        Err(out_of_bounds(bounds, p))
    }
}
