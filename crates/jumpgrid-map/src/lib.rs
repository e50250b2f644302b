//! Obstacle maps for jumpgrid searches.
//!
//! [`ObstacleGrid`] implements [`GridEnv`](jumpgrid_paths::GridEnv) and can
//! be edited cell by cell, read from and written to text, or generated at
//! random.

mod ascii;
mod grid;
mod mapgen;

pub use ascii::{FREE, MapError, OBSTACLE};
pub use grid::ObstacleGrid;
