//! Plain-text grid layouts.
//!
//! One line per row, one glyph per cell:
//!
//! ```text
//! S..#
//! .#..
//! ...E
//! ```
//!
//! `.` is an empty cell, `#` a barrier, `S` the start and `E` the end.
//! Surrounding whitespace and blank lines are ignored, so layouts can be
//! written indented inside raw string literals.

use std::str::FromStr;

use gridpath_core::{GridConfig, Point};

use crate::error::LayoutError;

/// A parsed layout: dimensions, barrier cells and optional markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub config: GridConfig,
    pub barriers: Vec<Point>,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut layout = Self::default();
        let mut width = None;
        let mut rows = 0;
        for (line_no, line) in text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
        {
            let found = line.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(LayoutError::Ragged {
                    line: line_no,
                    expected,
                    found,
                });
            }
            for (x, glyph) in line.chars().enumerate() {
                let p = Point::new(x as i32, rows);
                match glyph {
                    '.' => {}
                    '#' => layout.barriers.push(p),
                    'S' => set_marker(&mut layout.start, p, glyph)?,
                    'E' => set_marker(&mut layout.end, p, glyph)?,
                    _ => {
                        return Err(LayoutError::UnknownGlyph {
                            line: line_no,
                            column: x + 1,
                            glyph,
                        });
                    }
                }
            }
            rows += 1;
        }
        let Some(cols) = width else {
            return Err(LayoutError::Empty);
        };
        layout.config = GridConfig::new(cols as i32, rows);
        Ok(layout)
    }
}

fn set_marker(slot: &mut Option<Point>, p: Point, glyph: char) -> Result<(), LayoutError> {
    if slot.replace(p).is_some() {
        return Err(LayoutError::DuplicateMarker(glyph));
    }
    Ok(())
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
