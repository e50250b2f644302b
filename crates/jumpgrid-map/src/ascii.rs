//! Text form of obstacle grids.
//!
//! One line per row, starting at `y = 0`. [`OBSTACLE`] marks a blocked
//! cell and [`FREE`] an open one. Every line must have the same width.
//!
//! ```
//! use jumpgrid_core::Point;
//! use jumpgrid_map::ObstacleGrid;
//!
//! let grid = ObstacleGrid::parse("..#\n.#.").unwrap();
//! assert_eq!(grid.width(), 3);
//! assert!(grid.is_blocked(Point::new(1, 1)));
//! assert_eq!(grid.to_ascii(), "..#\n.#.");
//! ```

use std::fmt;
use std::str::FromStr;

use jumpgrid_core::Point;

use crate::grid::ObstacleGrid;

pub const OBSTACLE: char = '#';
pub const FREE: char = '.';

impl ObstacleGrid {
    /// Parse a grid from text. Leading and trailing whitespace around the
    /// whole string is ignored, but not within lines.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        let rows: Vec<&str> = s.lines().collect();
        let columns = rows.first().map_or(0, |r| r.chars().count());
        let width = dimension(columns)?;
        let height = dimension(rows.len())?;

        let mut grid = ObstacleGrid::new(width, height);
        for ((line, row), y) in rows.iter().enumerate().zip(0..height) {
            let found = row.chars().count();
            if found != columns {
                return Err(MapError::InconsistentSize {
                    line,
                    expected: columns,
                    found,
                });
            }
            for (x, ch) in (0..width).zip(row.chars()) {
                let pos = Point::new(x, y);
                match ch {
                    OBSTACLE => {
                        grid.set_obstacle(pos, true);
                    }
                    FREE => {}
                    _ => return Err(MapError::InvalidRune { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    /// Render the grid as text accepted by [`parse`](Self::parse).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.bounds().len() + self.height().max(0) as usize);
        for y in 0..self.height() {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width() {
                let blocked = self.is_blocked(Point::new(x, y));
                out.push(if blocked { OBSTACLE } else { FREE });
            }
        }
        out
    }
}

/// A row or column count as a grid coordinate.
fn dimension(n: usize) -> Result<i32, MapError> {
    i32::try_from(n).map_err(|_| MapError::TooLarge { len: n })
}

impl FromStr for ObstacleGrid {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, MapError> {
        Self::parse(s)
    }
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

/// Errors that can occur when parsing a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A line's width differs from the first line's.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than [`OBSTACLE`] or [`FREE`] was found.
    InvalidRune { ch: char, pos: Point },
    /// The text has more rows or columns than a coordinate can address.
    TooLarge { len: usize },
    /// Serialized cell flags do not cover the grid bounds exactly.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(f, "map: line {line} is {found} wide, expected {expected}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::TooLarge { len } => {
                write!(f, "map: {len} rows or columns exceed the coordinate range")
            }
            Self::CellCount { expected, found } => {
                write!(f, "map: {found} cell flags for {expected} cells")
            }
        }
    }
}

impl std::error::Error for MapError {}
