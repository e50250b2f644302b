//! Path utilities: densification of jump-point paths and cost accounting.

use jumpgrid_core::Point;

use crate::distance::step_cost;

/// Cells visited when walking from `from` towards `to`, excluding `from`
/// and including `to`. Each step moves every differing axis by one, so a
/// straight or 45° segment is walked exactly.
#[derive(Debug, Clone)]
pub(crate) struct Walk {
    cur: Point,
    to: Point,
}

impl Walk {
    pub(crate) fn new(from: Point, to: Point) -> Self {
        Self { cur: from, to }
    }
}

impl Iterator for Walk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.cur == self.to {
            return None;
        }
        self.cur += (self.to - self.cur).signum();
        Some(self.cur)
    }
}

/// Expand a list of waypoints into a continuous cell-by-cell path.
///
/// Consecutive waypoints are expected to lie on a common row, column or
/// diagonal, which holds for every jump-point path.
pub fn densify(waypoints: &[Point]) -> Vec<Point> {
    let Some(&first) = waypoints.first() else {
        return Vec::new();
    };
    let mut path = vec![first];
    for w in waypoints.windows(2) {
        path.extend(Walk::new(w[0], w[1]));
    }
    path
}

/// Total cost of a cell-by-cell path, 10 per straight step and 14 per
/// diagonal step.
pub fn path_cost(path: &[Point]) -> i32 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}

/// Whether every consecutive pair of cells is 8-adjacent.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn densify_straight_and_diagonal_runs() {
        let jp = [Point::new(0, 0), Point::new(3, 3), Point::new(3, 0)];
        let path = densify(&jp);
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3),
                Point::new(3, 2),
                Point::new(3, 1),
                Point::new(3, 0),
            ]
        );
        assert!(is_contiguous(&path));
        assert_eq!(path_cost(&path), 3 * 14 + 3 * 10);
    }

    #[test]
    fn densify_degenerate_inputs() {
        assert!(densify(&[]).is_empty());
        assert_eq!(densify(&[Point::new(2, 2)]), vec![Point::new(2, 2)]);
        assert_eq!(path_cost(&[Point::new(2, 2)]), 0);
    }

    #[test]
    fn densify_keeps_already_dense_paths() {
        let p = vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 1)];
        assert_eq!(densify(&p), p);
    }

    #[test]
    fn contiguity() {
        assert!(!is_contiguous(&[Point::new(0, 0), Point::new(2, 0)]));
        assert!(!is_contiguous(&[Point::new(0, 0), Point::new(0, 0)]));
        assert!(is_contiguous(&[]));
    }
}
