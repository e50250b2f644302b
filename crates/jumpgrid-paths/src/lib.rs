//! Shortest-path search on 8-connected grids.
//!
//! This crate provides two interchangeable searches over any
//! [`GridEnv`]:
//!
//! - **A\*** expanding every neighbour ([`AStar`])
//! - **Jump Point Search** expanding only jump points ([`Jps`])
//!
//! Straight steps cost [`STRAIGHT_COST`] and diagonal steps
//! [`DIAGONAL_COST`]; [`octile`] is the matching admissible heuristic.
//! A diagonal step is refused when both orthogonal corners are blocked.
//! Both searches return cell-by-cell paths with both endpoints included,
//! or [`NotFound`].
//!
//! Each search also has a stepped form ([`AStar::steps`], [`Jps::steps`])
//! that performs one unit of work per [`Iterator::next`] and reports what it
//! touched as [`Mark`]s, for visualizers.
//!
//! # Building blocks
//!
//! | Item | Role |
//! |---|---|
//! | [`PriorityQueue`] | 4-ary min-heap with an injected comparison |
//! | [`GridEnv`] | Bounds and walkability of the searched grid |
//! | [`FnGrid`] | [`GridEnv`] from a [`Range`](jumpgrid_core::Range) and a closure |
//! | [`densify`] | Expands jump points into a contiguous path |

mod astar;
mod dirs;
mod distance;
mod env;
mod error;
mod jps;
mod mark;
mod path;
mod queue;
mod step;

pub use astar::{AStar, AstarSteps};
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, is_straight, octile, squared_euclidean, step_cost};
pub use env::{FnGrid, GridEnv};
pub use error::{EmptyQueue, NotFound};
pub use jps::{Jps, JpsSteps};
pub use mark::Mark;
pub use path::{densify, is_contiguous, path_cost};
pub use queue::PriorityQueue;
