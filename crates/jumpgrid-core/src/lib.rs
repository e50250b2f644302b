//! **jumpgrid-core**: geometry primitives shared by the *jumpgrid* crates.
//!
//! [`Point`] is the integer cell coordinate every search works with, and
//! [`Range`] is the half-open rectangle used to describe map bounds.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
