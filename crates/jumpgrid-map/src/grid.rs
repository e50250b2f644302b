//! A dense obstacle map usable as a search environment.
//!
//! [`ObstacleGrid`] stores one flag per cell of a rectangle anchored at the
//! origin. Positions outside the rectangle read as obstacles.

use jumpgrid_core::{Point, Range};
use jumpgrid_paths::GridEnv;

#[cfg(feature = "serde")]
use crate::ascii::MapError;

/// A rectangular grid of free and blocked cells.
///
/// Deserializing checks that there is exactly one flag per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct ObstacleGrid {
    bounds: Range,
    blocked: Vec<bool>,
}

/// Unchecked serialized form of [`ObstacleGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    bounds: Range,
    blocked: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for ObstacleGrid {
    type Error = MapError;

    fn try_from(raw: RawGrid) -> Result<Self, MapError> {
        let expected = raw.bounds.len();
        if raw.blocked.len() != expected {
            return Err(MapError::CellCount {
                expected,
                found: raw.blocked.len(),
            });
        }
        Ok(Self {
            bounds: raw.bounds,
            blocked: raw.blocked,
        })
    }
}

impl ObstacleGrid {
    /// Create an obstacle-free grid. Negative sizes are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::with_size(width.max(0), height.max(0));
        Self {
            bounds,
            blocked: vec![false; bounds.len()],
        }
    }

    /// The rectangle covered by the grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is blocked. Off-grid positions are.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.bounds.index(p).is_none_or(|i| self.blocked[i])
    }

    /// Mark `p` blocked or free. Returns `false` (and does nothing) if `p`
    /// is off the grid.
    pub fn set_obstacle(&mut self, p: Point, blocked: bool) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.blocked[i] = blocked;
                true
            }
            None => false,
        }
    }

    /// Flip the state of `p`, returning the new state, or `None` off the
    /// grid.
    pub fn toggle(&mut self, p: Point) -> Option<bool> {
        let i = self.bounds.index(p)?;
        self.blocked[i] = !self.blocked[i];
        Some(self.blocked[i])
    }

    /// Make every cell free.
    pub fn clear(&mut self) {
        self.blocked.fill(false);
    }

    /// Number of blocked cells.
    pub fn count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Iterate over blocked positions in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds
            .iter()
            .zip(self.blocked.iter())
            .filter_map(|(p, &b)| b.then_some(p))
    }
}

impl GridEnv for ObstacleGrid {
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn is_moveable(&self, p: Point) -> bool {
        self.bounds.index(p).is_some_and(|i| !self.blocked[i])
    }
}
