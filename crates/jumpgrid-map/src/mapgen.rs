//! Random obstacle maps.

use jumpgrid_core::Point;
use rand::{Rng, RngExt};

use crate::grid::ObstacleGrid;

impl ObstacleGrid {
    /// Create a grid where each cell is independently blocked with
    /// probability `density`, clamped to `[0, 1]`.
    pub fn random(width: i32, height: i32, density: f64, rng: &mut impl Rng) -> Self {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        let mut grid = Self::new(width, height);
        for p in grid.bounds() {
            if rng.random_bool(density) {
                grid.set_obstacle(p, true);
            }
        }
        log::debug!(
            "map: random {}x{} grid, {} of {} cells blocked",
            grid.width(),
            grid.height(),
            grid.count(),
            grid.bounds().len()
        );
        grid
    }

    /// A uniformly chosen free cell, or `None` if there is none.
    pub fn random_free(&self, rng: &mut impl Rng) -> Option<Point> {
        let free = self.bounds().len() - self.count();
        if free == 0 {
            return None;
        }
        let nth = rng.random_range(0..free);
        self.bounds().iter().filter(|&p| !self.is_blocked(p)).nth(nth)
    }
}
