//! 2D geometry primitives shared by the hull algorithms.
//!
//! Purpose
//! - Turn tests, vectors, median selection and a `Line` whose vertical case
//!   is a variant rather than an infinite slope.
//! - Point identity (`PointId`) lives here too: every algorithm in the crate
//!   refers to input points by handle, never by coordinate equality.
//!
//! Conventions
//! - Coordinates are y-up. `Orientation::CounterClockwise` is a left turn.
//! - Predicates are exact (no epsilon); tolerances are explicit fields of
//!   `HullCfg` and applied only where documented.

mod types;
mod util;

pub use types::{Cloud, HullCfg, Line, MedianRule, Orientation, PointId, Slope};
pub use util::{cmp_xy, cross, distance, make_vector, median, orientation, signed_area};
