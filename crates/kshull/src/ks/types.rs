use nalgebra::Vector2;

use crate::error::NumericWarning;
use crate::geom2::{cross, signed_area, Cloud, PointId};

/// Which half of the hull a recursion builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chain {
    Upper,
    Lower,
}

impl Chain {
    /// `+1` for the upper chain, `-1` for the lower one.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Chain::Upper => 1.0,
            Chain::Lower => -1.0,
        }
    }

    /// Coordinates in which this chain is an upper chain (`y → -y` for `Lower`).
    ///
    /// Negation is exact, so every comparison made on lifted coordinates is the
    /// mirror image of the same comparison on the lower chain.
    #[inline]
    pub fn lift(self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(p.x, self.sign() * p.y)
    }

    pub fn name(self) -> &'static str {
        match self {
            Chain::Upper => "upper",
            Chain::Lower => "lower",
        }
    }
}

/// Supporting edge across a vertical split; `left.x <= right.x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bridge {
    pub left: PointId,
    pub right: PointId,
}

/// The four extreme points seeding both chains.
///
/// Invariants:
/// - `ul`, `ll` have minimal x; `ur`, `lr` maximal x.
/// - Ties in x go to maximal y (`ul`, `ur`) or minimal y (`ll`, `lr`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extremes {
    pub ul: PointId,
    pub ur: PointId,
    pub ll: PointId,
    pub lr: PointId,
}

/// Final convex polygon.
///
/// Invariants:
/// - Counterclockwise, starting at the lowest-leftmost vertex.
/// - No two vertices share coordinates; no vertex is collinear with its
///   neighbours (exact test).
/// - `ids[k]` is the input index of `vertices[k]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    pub ids: Vec<PointId>,
    pub vertices: Vec<Vector2<f64>>,
    pub warnings: Vec<NumericWarning>,
}

impl Hull {
    pub(crate) fn from_ids(cloud: Cloud<'_>, ids: Vec<PointId>) -> Self {
        let vertices = ids.iter().map(|&id| cloud.at(id)).collect();
        Self {
            ids,
            vertices,
            warnings: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Signed area; positive for any hull with at least three vertices.
    #[inline]
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Point-in-polygon test with slack `eps` (boundary counts as inside).
    ///
    /// Degenerate hulls: a segment contains the points on it, a single vertex
    /// contains itself.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        match self.vertices.len() {
            0 => false,
            1 => (self.vertices[0] - p).norm() <= eps,
            2 => {
                let (a, b) = (self.vertices[0], self.vertices[1]);
                let ab = b - a;
                let len = ab.norm();
                if len == 0.0 {
                    return (a - p).norm() <= eps;
                }
                let off_line = cross(ab, p - a).abs() / len;
                let t = ab.dot(&(p - a)) / (len * len);
                off_line <= eps && (-eps..=1.0 + eps).contains(&t)
            }
            n => (0..n).all(|k| {
                let a = self.vertices[k];
                let b = self.vertices[(k + 1) % n];
                let ab = b - a;
                cross(ab, p - a) >= -eps * ab.norm()
            }),
        }
    }
}
