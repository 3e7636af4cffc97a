//! Shared setup for the gridpath demos.

use std::path::PathBuf;

use clap::Parser;
use gridpath_core::{GridConfig, Point};
use gridpath_search::{FrontierKind, SearchConfig};
use gridpath_session::Session;
use rand::{Rng, SeedableRng};

/// Seed used when none is given on the command line.
pub const DEFAULT_SEED: u64 = 42;
/// Chance that a random cell becomes a barrier.
pub const BARRIER_DENSITY: f64 = 0.3;

/// Command-line options for `gridpath-demo`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "gridpath-demo")]
#[command(about = "Find and print a shortest path through a grid")]
pub struct Options {
    /// Layout file to load instead of a random grid
    pub layout: Option<PathBuf>,

    /// Seed for the random barriers
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Use the binary-heap frontier instead of the linear scan
    #[arg(long)]
    pub heap: bool,
}

impl Options {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            frontier: if self.heap {
                FrontierKind::Heap
            } else {
                FrontierKind::Scan
            },
        }
    }
}

/// A session with seeded random barriers, start in the top-left corner and
/// end in the bottom-right one.
pub fn random_session(
    config: GridConfig,
    search: SearchConfig,
    density: f64,
    seed: u64,
) -> gridpath_session::Result<Session> {
    let mut session = Session::with_search_config(config, search);
    let start = Point::ZERO;
    let end = Point::new(config.cols - 1, config.rows - 1);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    for p in session.grid().bounds().iter_columns() {
        if p != start && p != end && rng.random_bool(density) {
            session.set_barrier(p, true)?;
        }
    }
    session.designate_start(start)?;
    session.designate_end(end)?;
    Ok(session)
}
