use jumpgrid_core::{Point, Range};

/// The capabilities a search needs from a grid.
///
/// Positions outside the grid must report `false` from
/// [`is_moveable`](Self::is_moveable); searches probe past the edges while
/// scanning and rely on that to stop.
pub trait GridEnv {
    /// Whether `p` lies on the grid.
    fn in_bounds(&self, p: Point) -> bool;

    /// Whether `p` is on the grid and free to walk on.
    fn is_moveable(&self, p: Point) -> bool;

    /// Whether `p` blocks movement. Off-grid positions are obstacles.
    fn is_obstacle(&self, p: Point) -> bool {
        !self.in_bounds(p) || !self.is_moveable(p)
    }

    /// Append the up to eight on-grid positions around `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_8().into_iter().filter(|&n| self.in_bounds(n)));
    }

    /// Whether a single step from `from` to the adjacent `to` is legal.
    ///
    /// Diagonal steps need at least one of the two orthogonal corners to be
    /// moveable; squeezing between two blocked corners is not allowed.
    fn can_step(&self, from: Point, to: Point) -> bool {
        if !self.is_moveable(to) {
            return false;
        }
        let d = to - from;
        if d.x == 0 || d.y == 0 {
            return true;
        }
        self.is_moveable(from.shift(d.x, 0)) || self.is_moveable(from.shift(0, d.y))
    }
}

/// A [`GridEnv`] built from a bounding range and a passability predicate.
///
/// ```
/// use jumpgrid_core::{Point, Range};
/// use jumpgrid_paths::{FnGrid, GridEnv};
///
/// let grid = FnGrid::new(Range::with_size(4, 4), |p: Point| p != Point::new(1, 1));
/// assert!(grid.is_obstacle(Point::new(1, 1)));
/// assert!(grid.is_obstacle(Point::new(4, 0)));
/// assert!(grid.is_moveable(Point::new(0, 0)));
/// ```
pub struct FnGrid<F> {
    bounds: Range,
    passable: F,
}

impl<F: Fn(Point) -> bool> FnGrid<F> {
    pub fn new(bounds: Range, passable: F) -> Self {
        Self { bounds, passable }
    }

    pub fn bounds(&self) -> Range {
        self.bounds
    }
}

impl<F: Fn(Point) -> bool> GridEnv for FnGrid<F> {
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn is_moveable(&self, p: Point) -> bool {
        self.bounds.contains(p) && (self.passable)(p)
    }
}
