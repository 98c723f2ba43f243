//! Chain recursion as an explicit stack of frames.
//!
//! A frame `(pmin, pmax, points)` asks for the chain from `pmin` to `pmax`
//! over `points` (both ends included). Resolving a frame either emits output
//! (base cases) or splits it at the bridge into a left and a right frame.
//! The right frame is pushed first so frames pop in left-to-right order and
//! the output is the in-order concatenation of the sub-chains.

use super::bridge::{find_bridge, Ctx};
use super::trace::{emit, Snapshot, TraceSink};
use super::types::{Bridge, Chain};
use crate::geom2::{cross, make_vector, median, PointId};

#[derive(Clone, Debug)]
struct Frame {
    pmin: PointId,
    pmax: PointId,
    points: Vec<PointId>,
}

/// Builds one chain, one frame per `step`.
#[derive(Clone, Debug)]
pub(crate) struct ChainBuilder {
    chain: Chain,
    stack: Vec<Frame>,
    out: Vec<PointId>,
}

impl ChainBuilder {
    /// Pre: `points` contains `pmin` and `pmax`; no other point shares the x
    /// coordinate of either.
    pub(crate) fn new(chain: Chain, pmin: PointId, pmax: PointId, points: Vec<PointId>) -> Self {
        Self {
            chain,
            stack: vec![Frame { pmin, pmax, points }],
            out: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn chain(&self) -> Chain {
        self.chain
    }

    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    /// Chain vertices from `pmin` to `pmax`, by increasing x.
    pub(crate) fn finish(self) -> Vec<PointId> {
        self.out
    }

    /// Resolve the frame on top of the stack.
    ///
    /// Each child frame lacks one bridge end of its parent, so the total
    /// work is finite.
    pub(crate) fn step<T: TraceSink + ?Sized>(&mut self, ctx: &mut Ctx<'_, T>) {
        let Some(Frame { pmin, pmax, points }) = self.stack.pop() else {
            return;
        };
        if pmin == pmax {
            self.out.push(pmin);
            return;
        }
        let cloud = ctx.cloud;
        if points.len() <= 2 {
            let mut ends = points;
            ends.sort_by(|&p, &q| cloud.at(p).x.total_cmp(&cloud.at(q).x));
            self.out.extend(ends);
            return;
        }

        let chain = self.chain;
        let mut xs: Vec<f64> = points.iter().map(|&id| cloud.at(id).x).collect();
        let Some(a) = median(&mut xs, ctx.cfg.median) else {
            self.out.extend([pmin, pmax]);
            return;
        };
        emit(ctx.sink, || Snapshot::MedianSplit {
            chain,
            a,
            points: points.clone(),
        });

        let Some(bridge) = find_bridge(ctx, chain, points.clone(), a) else {
            self.out.extend([pmin, pmax]);
            return;
        };
        emit(ctx.sink, || Snapshot::BridgeFound { chain, a, bridge });

        let Bridge {
            left: pl,
            right: pr,
        } = bridge;
        let lift = |id: PointId| chain.lift(cloud.at(id));
        let (lmin, lpl, lpr, lmax) = (lift(pmin), lift(pl), lift(pr), lift(pmax));
        let v1 = make_vector(lmin, lpl);
        let v2 = make_vector(lpr, lmax);

        // Points under both chords lie inside pmin-pl-pr-pmax and are dropped.
        let mut left = Vec::new();
        let mut right = Vec::new();
        for &id in &points {
            if id == pl || id == pr || id == pmin || id == pmax {
                continue;
            }
            let q = lift(id);
            if cross(v1, make_vector(lpl, q)) > 0.0 {
                left.push(id);
            }
            if cross(v2, make_vector(lmax, q)) > 0.0 {
                right.push(id);
            }
        }
        left.push(pl);
        if pl != pmin {
            left.push(pmin);
        }
        right.push(pr);
        if pr != pmax {
            right.push(pmax);
        }
        emit(ctx.sink, || Snapshot::Partitioned {
            chain,
            bridge,
            left: left.clone(),
            right: right.clone(),
        });

        self.stack.push(Frame {
            pmin: pr,
            pmax,
            points: right,
        });
        self.stack.push(Frame {
            pmin,
            pmax: pl,
            points: left,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::trace::NoTrace;
    use super::*;
    use crate::geom2::{Cloud, HullCfg};
    use nalgebra::{vector, Vector2};

    fn build(pts: &[Vector2<f64>], chain: Chain, pmin: usize, pmax: usize) -> Vec<usize> {
        let cloud = Cloud::new(pts);
        let mut warnings = Vec::new();
        let mut sink = NoTrace;
        let mut ctx = Ctx {
            cloud,
            cfg: HullCfg::default(),
            sink: &mut sink,
            warnings: &mut warnings,
        };
        let mut cb = ChainBuilder::new(chain, PointId(pmin), PointId(pmax), cloud.ids());
        while !cb.is_done() {
            cb.step(&mut ctx);
        }
        cb.finish().into_iter().map(|id| id.0).collect()
    }

    fn arch() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 2.0],
            vector![3.0, 4.0],
            vector![5.0, 2.0],
            vector![2.0, 1.0],
            vector![6.0, 0.0],
            vector![4.0, 0.5],
        ]
    }

    #[test]
    fn upper_chain_left_to_right() {
        assert_eq!(build(&arch(), Chain::Upper, 0, 5), vec![0, 1, 2, 3, 5]);
    }

    #[test]
    fn lower_chain_of_arch_is_its_base() {
        assert_eq!(build(&arch(), Chain::Lower, 0, 5), vec![0, 5]);
    }

    #[test]
    fn single_point_frame() {
        let pts = [vector![1.0, 1.0]];
        assert_eq!(build(&pts, Chain::Upper, 0, 0), vec![0]);
    }

    #[test]
    fn collinear_points_collapse_to_ends() {
        let pts: Vec<_> = (0..7).map(|i| vector![i as f64, 2.0 * i as f64]).collect();
        assert_eq!(build(&pts, Chain::Upper, 0, 6), vec![0, 6]);
        assert_eq!(build(&pts, Chain::Lower, 0, 6), vec![0, 6]);
    }
}
