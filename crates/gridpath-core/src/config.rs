//! Grid configuration.

/// Default number of columns.
pub const DEFAULT_COLS: i32 = 30;
/// Default number of rows.
pub const DEFAULT_ROWS: i32 = 30;

/// Dimensions used to build a [`Grid`](crate::Grid).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub cols: i32,
    pub rows: i32,
}

impl GridConfig {
    pub const fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}
