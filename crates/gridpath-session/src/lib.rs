//! Interactive sessions over *gridpath* grids.
//!
//! A [`Session`] owns a grid, its start and end markers, a reusable
//! [`PathSearch`](gridpath_search::PathSearch) and a text [`Canvas`].
//! Edits arrive as presses and drags, or as explicit designations; a run
//! paints visited and path cells and leaves a one-line message.
//!
//! Sessions can also be loaded from a plain-text [`Layout`].

mod canvas;
mod error;
mod layout;
mod session;

pub use canvas::{Canvas, Paint};
pub use error::{LayoutError, Result, SessionError};
pub use layout::Layout;
pub use session::{NO_PATH, PATH_FOUND, Press, Session};
