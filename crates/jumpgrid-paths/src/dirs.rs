//! Direction table for jump point search.

use jumpgrid_core::Point;

pub(crate) const UP: Point = Point::new(0, 1);
pub(crate) const DOWN: Point = Point::new(0, -1);
pub(crate) const LEFT: Point = Point::new(-1, 0);
pub(crate) const RIGHT: Point = Point::new(1, 0);
pub(crate) const LEFT_UP: Point = Point::new(-1, 1);
pub(crate) const LEFT_DOWN: Point = Point::new(-1, -1);
pub(crate) const RIGHT_UP: Point = Point::new(1, 1);
pub(crate) const RIGHT_DOWN: Point = Point::new(1, -1);

/// Directions scanned from the start node.
pub(crate) const ALL: [Point; 8] = [
    UP, DOWN, LEFT, RIGHT, LEFT_UP, LEFT_DOWN, RIGHT_UP, RIGHT_DOWN,
];

/// The two directions perpendicular to a straight direction.
#[inline]
pub(crate) fn perpendicular(dir: Point) -> [Point; 2] {
    if dir.x != 0 { [UP, DOWN] } else { [LEFT, RIGHT] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendiculars() {
        assert_eq!(perpendicular(LEFT), [UP, DOWN]);
        assert_eq!(perpendicular(RIGHT), [UP, DOWN]);
        assert_eq!(perpendicular(UP), [LEFT, RIGHT]);
        assert_eq!(perpendicular(DOWN), [LEFT, RIGHT]);
    }

    #[test]
    fn start_directions_cover_every_neighbor() {
        let mut around = Point::ZERO.neighbors_8().to_vec();
        around.sort();
        let mut all = ALL.to_vec();
        all.sort();
        assert_eq!(around, all);
    }
}
