use std::cmp::Ordering;

use nalgebra::Vector2;

use super::types::{MedianRule, Orientation};

/// Orientation of `p1 → p2 → p3`.
///
/// Exact zero is collinear; callers needing a tolerance apply it themselves.
#[inline]
pub fn orientation(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Orientation {
    let d = (p2.y - p1.y) * (p3.x - p2.x) - (p2.x - p1.x) * (p3.y - p2.y);
    if d > 0.0 {
        Orientation::Clockwise
    } else if d < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Vector from `p1` to `p2`.
#[inline]
pub fn make_vector(p1: Vector2<f64>, p2: Vector2<f64>) -> Vector2<f64> {
    p2 - p1
}

/// z-component of `v1 × v2`. Positive when `v2` turns left of `v1`.
#[inline]
pub fn cross(v1: Vector2<f64>, v2: Vector2<f64>) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

#[inline]
pub fn distance(p1: Vector2<f64>, p2: Vector2<f64>) -> f64 {
    (p2 - p1).norm()
}

/// Lexicographic `(x, y)` total order.
#[inline]
pub fn cmp_xy(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Shoelace signed area; positive for counterclockwise vertex order.
pub fn signed_area(poly: &[Vector2<f64>]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..poly.len() {
        let p = poly[k];
        let q = poly[(k + 1) % poly.len()];
        twice += cross(p, q);
    }
    0.5 * twice
}

/// Mean of two finite values without overflowing near `f64::MAX`.
///
/// Halving is exact for normal floats, so this rounds like `(lo + hi) / 2`.
#[inline]
fn midpoint(lo: f64, hi: f64) -> f64 {
    lo / 2.0 + hi / 2.0
}

/// Median of `values` (reorders the slice). Odd length: middle element;
/// even length: mean of the two middle elements. `None` when empty.
///
/// Cost
/// - `MedianRule::Select` runs `select_nth_unstable_by`, linear in `n`. This is
///   what keeps one bridge round at O(n) and the whole hull at O(n log h).
/// - `MedianRule::Sort` sorts the slice: O(n log n) per bridge round, which
///   raises the worst case of the hull to O(n log n log h). Kept for
///   cross-checking; results are identical.
pub fn median(values: &mut [f64], rule: MedianRule) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    match rule {
        MedianRule::Sort => {
            values.sort_unstable_by(f64::total_cmp);
            if n % 2 == 1 {
                Some(values[mid])
            } else {
                Some(midpoint(values[mid - 1], values[mid]))
            }
        }
        MedianRule::Select => {
            let (lower, hi, _) = values.select_nth_unstable_by(mid, f64::total_cmp);
            let hi = *hi;
            if n % 2 == 1 {
                return Some(hi);
            }
            let lo = lower.iter().copied().max_by(f64::total_cmp)?;
            Some(midpoint(lo, hi))
        }
    }
}
