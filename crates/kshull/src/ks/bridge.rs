//! Bridge finder: the supporting edge of one chain across a vertical split.
//!
//! Every comparison runs on chain-lifted coordinates (`Chain::lift`), so the
//! lower chain uses exactly the upper rules on the mirrored set. In lifted
//! terms the retention table after a failed round is:
//!
//! | supporting line        | SMALL | EQUAL | LARGE |
//! |------------------------|-------|-------|-------|
//! | right of split missing (`pm.x <= a`) | both  | right | right |
//! | left of split missing (`pk.x > a`)   | left  | left  | both  |
//!
//! Read on input coordinates for the lower chain, SMALL and LARGE swap roles.

use super::trace::{emit, Segment, Snapshot, TraceSink};
use super::types::{Bridge, Chain};
use crate::error::NumericWarning;
use crate::geom2::{cross, make_vector, median, Cloud, HullCfg, Line, PointId, Slope};

/// Shared state threaded through one chain recursion.
pub(crate) struct Ctx<'a, T: TraceSink + ?Sized> {
    pub cloud: Cloud<'a>,
    pub cfg: HullCfg,
    pub sink: &'a mut T,
    pub warnings: &'a mut Vec<NumericWarning>,
}

/// Pair with a finite lifted slope; `left.x < right.x`.
#[derive(Clone, Copy, Debug)]
struct Pair {
    left: PointId,
    right: PointId,
    slope: f64,
}

impl Pair {
    #[inline]
    fn segment(&self) -> Segment {
        (self.left, self.right)
    }
}

/// Find the bridge of `s` over the split `a`; `None` only for an empty `s`.
///
/// Pre: `s.len() >= 2`, ids distinct, at least one point with `x <= a` and one
/// with `x > a`. Every round drops at least one point, so the loop ends at the
/// two-point base case at the latest.
pub(crate) fn find_bridge<T: TraceSink + ?Sized>(
    ctx: &mut Ctx<'_, T>,
    chain: Chain,
    mut s: Vec<PointId>,
    a: f64,
) -> Option<Bridge> {
    let cloud = ctx.cloud;
    let lift = |id: PointId| chain.lift(cloud.at(id));
    loop {
        match s.as_slice() {
            [] => return None,
            [only] => {
                return Some(Bridge {
                    left: *only,
                    right: *only,
                })
            }
            [p, q] => {
                let (left, right) = if lift(*q).x < lift(*p).x {
                    (*q, *p)
                } else {
                    (*p, *q)
                };
                return Some(Bridge { left, right });
            }
            _ => {}
        }

        let mut candidates: Vec<PointId> = Vec::with_capacity(s.len() / 2 + 1);
        let mut pairs: Vec<Pair> = Vec::with_capacity(s.len() / 2);
        let chunks = s.chunks_exact(2);
        if let Some(&leftover) = chunks.remainder().first() {
            candidates.push(leftover);
        }
        for chunk in chunks {
            let (mut p, mut q) = (chunk[0], chunk[1]);
            if lift(p).x > lift(q).x {
                std::mem::swap(&mut p, &mut q);
            }
            match Line::new(lift(p), lift(q)).slope() {
                // Only the higher of two stacked points can be on the chain.
                Slope::Vertical => candidates.push(if lift(q).y > lift(p).y { q } else { p }),
                Slope::Finite(slope) => pairs.push(Pair {
                    left: p,
                    right: q,
                    slope,
                }),
            }
        }

        let mut slopes: Vec<f64> = pairs.iter().map(|p| p.slope).collect();
        let Some(k) = median(&mut slopes, ctx.cfg.median) else {
            emit(ctx.sink, || Snapshot::BridgeRound {
                chain,
                a,
                median_slope: None,
                small: Vec::new(),
                equal: Vec::new(),
                large: Vec::new(),
                support: None,
                kept: candidates.clone(),
            });
            s = candidates;
            continue;
        };

        let mut small = Vec::new();
        let mut equal = Vec::new();
        let mut large = Vec::new();
        for pair in &pairs {
            if pair.slope < k {
                small.push(*pair);
            } else if pair.slope == k {
                equal.push(*pair);
            } else {
                large.push(*pair);
            }
        }

        let (pk, pm) = supporting_line(ctx, chain, &s, k);
        let straddles = lift(pk).x <= a && a < lift(pm).x;
        if !straddles {
            if lift(pm).x <= a {
                for p in &small {
                    candidates.push(p.left);
                    candidates.push(p.right);
                }
                candidates.extend(equal.iter().map(|p| p.right));
                candidates.extend(large.iter().map(|p| p.right));
            } else {
                candidates.extend(small.iter().map(|p| p.left));
                candidates.extend(equal.iter().map(|p| p.left));
                for p in &large {
                    candidates.push(p.left);
                    candidates.push(p.right);
                }
            }
        }
        emit(ctx.sink, || Snapshot::BridgeRound {
            chain,
            a,
            median_slope: Some(chain.sign() * k),
            small: small.iter().map(Pair::segment).collect(),
            equal: equal.iter().map(Pair::segment).collect(),
            large: large.iter().map(Pair::segment).collect(),
            support: Some((pk, pm)),
            kept: if straddles {
                vec![pk, pm]
            } else {
                candidates.clone()
            },
        });
        if straddles {
            return Some(Bridge {
                left: pk,
                right: pm,
            });
        }
        s = candidates;
    }
}

/// Points of `s` on the supporting line of lifted slope `k`: `(leftmost, rightmost)`.
///
/// Intercepts within the tie band of the maximum count as ties. The band is
/// `eps_tie` scaled by the magnitude of the frame (`max(1, |c|, |k| max|x|)`).
/// A widened pair is accepted only if no point of `s` lies strictly above the
/// line through it; otherwise the exact maximizers are used. An accepted
/// point whose intercept is not exactly the maximum records a `NearTie`.
fn supporting_line<T: TraceSink + ?Sized>(
    ctx: &mut Ctx<'_, T>,
    chain: Chain,
    s: &[PointId],
    k: f64,
) -> (PointId, PointId) {
    let cloud = ctx.cloud;
    let lift = |id: PointId| chain.lift(cloud.at(id));
    let intercept = |id: PointId| {
        let p = lift(id);
        p.y - k * p.x
    };
    let mut best = s[0];
    let mut best_c = intercept(best);
    let mut max_x: f64 = 0.0;
    for &id in s {
        let c = intercept(id);
        if c > best_c {
            best = id;
            best_c = c;
        }
        max_x = max_x.max(cloud.at(id).x.abs());
    }
    let band = ctx.cfg.eps_tie * 1f64.max(best_c.abs()).max(k.abs() * max_x);

    let extremes_within = |tol: f64| {
        let (mut pk, mut pm) = (best, best);
        for &id in s {
            if best_c - intercept(id) <= tol {
                let x = cloud.at(id).x;
                if x < cloud.at(pk).x {
                    pk = id;
                }
                if x > cloud.at(pm).x {
                    pm = id;
                }
            }
        }
        (pk, pm)
    };

    let (pk, pm) = extremes_within(band);
    let supporting = pk == pm || {
        let dir = make_vector(lift(pk), lift(pm));
        s.iter()
            .all(|&id| cross(dir, make_vector(lift(pk), lift(id))) <= 0.0)
    };
    if !supporting {
        return extremes_within(0.0);
    }
    for id in [pk, pm] {
        let gap = best_c - intercept(id);
        if gap != 0.0 {
            ctx.warnings.push(NumericWarning::NearTie {
                chain,
                slope: chain.sign() * k,
                gap,
                point: id,
            });
        }
    }
    (pk, pm)
}
