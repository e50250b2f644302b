use jumpgrid_core::Point;

/// Cost of one axis-aligned step.
pub const STRAIGHT_COST: i32 = 10;
/// Cost of one diagonal step, an integer stand-in for 10·√2.
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance: the cheapest 8-connected cost between two points on an
/// empty grid. Admissible and consistent for [`STRAIGHT_COST`] /
/// [`DIAGONAL_COST`] steps.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let diag = dx.min(dy);
    DIAGONAL_COST * diag + STRAIGHT_COST * (dx.max(dy) - diag)
}

/// Whether a direction (or offset) is axis-aligned.
#[inline]
pub fn is_straight(dir: Point) -> bool {
    dir.x * dir.y == 0
}

/// Cost of one step between adjacent cells.
#[inline]
pub fn step_cost(from: Point, to: Point) -> i32 {
    if is_straight(to - from) {
        STRAIGHT_COST
    } else {
        DIAGONAL_COST
    }
}

/// Squared Euclidean distance.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> i32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
