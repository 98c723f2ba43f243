//! Error and warning types.
//!
//! Validation runs once, before any recursion starts. The bridge finder and
//! the recursor never fail; the only thing they report is `NumericWarning`.

use nalgebra::Vector2;
use thiserror::Error;

use crate::geom2::PointId;
use crate::ks::Chain;

/// Input rejected before the hull is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// Fewer than three distinct points; no polygon with area exists.
    #[error("insufficient points: {distinct} distinct, need at least 3")]
    InsufficientPoints { distinct: usize },

    /// Every point lies on one line. The hull is the segment `from`–`to`.
    #[error("all points are collinear; hull degenerates to the segment {from:?} - {to:?}")]
    DegenerateInput {
        from: (PointId, Vector2<f64>),
        to: (PointId, Vector2<f64>),
    },
}

/// Non-fatal notice attached to a finished hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericWarning {
    /// A supporting-line intercept differed from the maximum by `gap`
    /// (`0 < gap < eps_tie`) and was still treated as a tie; the vertex choice
    /// at `point` was tie-broken rather than exact.
    NearTie {
        chain: Chain,
        slope: f64,
        gap: f64,
        point: PointId,
    },
}
