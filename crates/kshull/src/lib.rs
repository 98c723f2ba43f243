//! Convex hulls of planar point sets.
//!
//! - `ks`: Kirkpatrick–Seidel hull (O(n log h)), with a snapshot stream and a
//!   resumable step iterator for visualizers.
//! - `jarvis`: Jarvis march, the O(n h) reference used for cross-checks.
//! - `geom2`: exact predicates, median selection, point handles.
//!
//! Coordinates are y-up; hulls are counterclockwise from the lowest-leftmost
//! vertex.

pub mod error;
pub mod geom2;
pub mod jarvis;
pub mod ks;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, NumericWarning};
pub use geom2::{HullCfg, MedianRule, PointId};
pub use jarvis::jarvis_march;
pub use ks::{convex_hull, convex_hull_traced, kirkpatrick_seidel, Hull, HullSteps, Snapshot};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{HullError, NumericWarning};
    pub use crate::geom2::{orientation, signed_area, HullCfg, MedianRule, Orientation, PointId};
    pub use crate::jarvis::jarvis_march;
    pub use crate::ks::{
        convex_hull, convex_hull_traced, kirkpatrick_seidel, kirkpatrick_seidel_with_sink, Chain,
        Hull, HullSteps, NoTrace, Snapshot, TraceSink,
    };
    pub use nalgebra::Vector2 as Vec2;
}
