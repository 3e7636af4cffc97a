//! Text-mode shortest-path demo.
//!
//! Run: cargo run --bin gridpath-demo -- [LAYOUT] [--seed N] [--heap]
//!
//! Try `demos/layouts/maze.txt` for a hand-drawn maze.
//!
//! Without a layout file, searches a default-size grid with seeded random
//! barriers from the top-left to the bottom-right corner.

use clap::Parser;
use gridpath_core::GridConfig;
use gridpath_demos::{BARRIER_DENSITY, Options, random_session};
use gridpath_session::Session;

fn load(opts: &Options) -> Result<Session, Box<dyn std::error::Error>> {
    let Some(path) = &opts.layout else {
        let config = GridConfig::default();
        log::info!("random {}x{} grid, seed {}", config.cols, config.rows, opts.seed);
        return Ok(random_session(
            config,
            opts.search_config(),
            BARRIER_DENSITY,
            opts.seed,
        )?);
    };
    log::info!("loading layout {}", path.display());
    let text = std::fs::read_to_string(path)?;
    Ok(Session::from_layout_with_config(&text, opts.search_config())?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Options::parse();
    let mut session = load(&opts)?;

    if session.run()?.is_none() {
        log::warn!("layout needs both S and E to search");
    }
    println!("{session}");
    Ok(())
}
