//! Grid model shared by the *gridpath* crates.
//!
//! This crate provides geometry primitives, the [`Cell`] type with its
//! barrier flag, and the fixed-size [`Grid`] that owns every cell.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
