//! Kirkpatrick–Seidel ("marriage before conquest") convex hull.
//!
//! Purpose
//! - Build the upper and lower chains independently. Each chain splits its
//!   point set at the median x, finds the bridge across the split with a
//!   median-of-slopes filter, discards everything under the bridge and
//!   recurses on both sides. O(n log h) with linear-time median selection.
//!
//! Pipeline
//! - `normalize`: sort by x, drop same-ray duplicates.
//! - `extremes`: UL/UR/LL/LR seeds.
//! - `bridge`: supporting edge over a split (lower chain = mirrored upper).
//! - `recurse`: explicit frame stack per chain.
//! - `assemble`: driver state machine, merge, validation, entry points.
//! - `trace`/`steps`: snapshot stream and the resumable iterator.
//!
//! Identity
//! - Points are referred to by `PointId` (input index) throughout; two inputs
//!   with equal coordinates stay distinguishable.

mod assemble;
mod bridge;
mod extremes;
mod normalize;
mod recurse;
mod steps;
mod trace;
mod types;

pub(crate) use assemble::close_polygon;
pub use assemble::{
    convex_hull, convex_hull_traced, kirkpatrick_seidel, kirkpatrick_seidel_with_sink,
};
pub use steps::HullSteps;
pub use trace::{NoTrace, Segment, Snapshot, TraceSink};
pub use types::{Bridge, Chain, Extremes, Hull};
