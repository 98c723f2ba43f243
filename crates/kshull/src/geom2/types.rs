//! Basic 2D types and tolerances used by the hull algorithms.
//!
//! - `HullCfg`: centralizes the tie epsilon and the median rule.
//! - `PointId`, `Cloud`: stable point handles and the view resolving them.
//! - `Line`, `Slope`: segment between two points with an explicit vertical case.
//! - `Orientation`: result of the three-point turn test.

use nalgebra::Vector2;

/// Median selection rule.
///
/// Both rules return the same value; they differ in cost only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MedianRule {
    /// `select_nth_unstable_by`: linear time, keeps a bridge round at O(n).
    #[default]
    Select,
    /// Full sort: O(n log n) per bridge round, O(n log n log h) overall.
    Sort,
}

/// Hull configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Intercept band treated as a tie when locating the supporting line.
    pub eps_tie: f64,
    pub median: MedianRule,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_tie: 5e-5,
            median: MedianRule::Select,
        }
    }
}

/// Stable handle of an input point: its index in the caller's slice.
///
/// Two points with identical coordinates keep distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Read-only view resolving `PointId`s to coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Cloud<'a> {
    pts: &'a [Vector2<f64>],
}

impl<'a> Cloud<'a> {
    #[inline]
    pub fn new(pts: &'a [Vector2<f64>]) -> Self {
        Self { pts }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }
    #[inline]
    pub fn at(&self, id: PointId) -> Vector2<f64> {
        self.pts[id.0]
    }
    /// All ids in input order.
    pub fn ids(&self) -> Vec<PointId> {
        (0..self.pts.len()).map(PointId).collect()
    }
}

impl std::ops::Index<PointId> for Cloud<'_> {
    type Output = Vector2<f64>;
    #[inline]
    fn index(&self, id: PointId) -> &Self::Output {
        &self.pts[id.0]
    }
}

/// Turn direction of three points (y-up convention).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Slope of a line; vertical lines have no finite slope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Finite(f64),
    Vertical,
}

impl Slope {
    #[inline]
    pub fn finite(self) -> Option<f64> {
        match self {
            Slope::Finite(m) => Some(m),
            Slope::Vertical => None,
        }
    }
}

/// Directed segment `p1 → p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
}

impl Line {
    #[inline]
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self { p1, p2 }
    }

    /// `(p1.y - p2.y) / (p1.x - p2.x)`, or `Vertical` when the x coordinates agree.
    #[inline]
    pub fn slope(&self) -> Slope {
        let dx = self.p1.x - self.p2.x;
        if dx == 0.0 {
            Slope::Vertical
        } else {
            Slope::Finite((self.p1.y - self.p2.y) / dx)
        }
    }

    /// `y = M x + C` intercept; `None` for vertical lines.
    #[inline]
    pub fn intercept(&self) -> Option<f64> {
        self.slope().finite().map(|m| self.p1.y - m * self.p1.x)
    }
}
