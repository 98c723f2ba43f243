//! Hull assembly: the driver state machine and the public entry points.
//!
//! Stages: `Start` (normalize, extremes, seed upper) → `Upper` (one frame per
//! advance) → `Lower` → `Done` (merge). The atomic entry points and the
//! `HullSteps` iterator drive the same machine, so they agree exactly.

use nalgebra::Vector2;

use super::bridge::Ctx;
use super::extremes::find_extremes;
use super::normalize::remove_degeneracies;
use super::recurse::ChainBuilder;
use super::trace::{emit, NoTrace, Snapshot, TraceSink};
use super::types::{Chain, Extremes, Hull};
use crate::error::{HullError, NumericWarning};
use crate::geom2::{cmp_xy, orientation, signed_area, Cloud, HullCfg, Orientation, PointId};

enum Stage {
    Start,
    Chain(ChainBuilder),
    Done,
}

pub(crate) struct Driver<'a> {
    cloud: Cloud<'a>,
    cfg: HullCfg,
    stage: Stage,
    kept: Vec<PointId>,
    extremes: Option<Extremes>,
    upper: Vec<PointId>,
    warnings: Vec<NumericWarning>,
    hull: Option<Hull>,
}

impl<'a> Driver<'a> {
    pub(crate) fn new(cloud: Cloud<'a>, cfg: HullCfg) -> Self {
        Self {
            cloud,
            cfg,
            stage: Stage::Start,
            kept: Vec::new(),
            extremes: None,
            upper: Vec::new(),
            warnings: Vec::new(),
            hull: None,
        }
    }

    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        matches!(self.stage, Stage::Done)
    }

    /// The assembled hull once `is_done()`.
    pub(crate) fn into_hull(self) -> Option<Hull> {
        self.hull
    }

    /// Run one transition of the machine.
    pub(crate) fn advance<T: TraceSink + ?Sized>(&mut self, sink: &mut T) {
        self.stage = match std::mem::replace(&mut self.stage, Stage::Done) {
            Stage::Start => self.start(sink),
            Stage::Chain(mut cb) => {
                let mut ctx = Ctx {
                    cloud: self.cloud,
                    cfg: self.cfg,
                    sink: &mut *sink,
                    warnings: &mut self.warnings,
                };
                cb.step(&mut ctx);
                if !cb.is_done() {
                    Stage::Chain(cb)
                } else {
                    let chain = cb.chain();
                    let vertices = cb.finish();
                    emit(sink, || Snapshot::ChainComplete {
                        chain,
                        vertices: vertices.clone(),
                    });
                    match chain {
                        Chain::Upper => {
                            self.upper = vertices;
                            self.seed(Chain::Lower, sink)
                        }
                        Chain::Lower => {
                            self.finish(vertices, sink);
                            Stage::Done
                        }
                    }
                }
            }
            Stage::Done => Stage::Done,
        };
    }

    fn start<T: TraceSink + ?Sized>(&mut self, sink: &mut T) -> Stage {
        let (kept, dropped) = remove_degeneracies(self.cloud, &self.cloud.ids());
        emit(sink, || Snapshot::Normalized {
            kept: kept.clone(),
            dropped,
        });
        self.kept = kept;
        let Some(ex) = find_extremes(self.cloud, &self.kept) else {
            self.finish(Vec::new(), sink);
            return Stage::Done;
        };
        emit(sink, || Snapshot::ExtremesFound(ex));
        self.extremes = Some(ex);
        self.seed(Chain::Upper, sink)
    }

    /// Candidates of one chain: every point off the two extreme verticals,
    /// plus the chain's own extremes.
    fn seed<T: TraceSink + ?Sized>(&mut self, chain: Chain, sink: &mut T) -> Stage {
        let Some(ex) = self.extremes else {
            return Stage::Done;
        };
        let (pmin, pmax) = match chain {
            Chain::Upper => (ex.ul, ex.ur),
            Chain::Lower => (ex.ll, ex.lr),
        };
        let (xmin, xmax) = (self.cloud.at(pmin).x, self.cloud.at(pmax).x);
        let mut candidates: Vec<PointId> = self
            .kept
            .iter()
            .copied()
            .filter(|&id| {
                let x = self.cloud.at(id).x;
                x != xmin && x != xmax
            })
            .collect();
        candidates.push(pmin);
        if pmax != pmin {
            candidates.push(pmax);
        }
        emit(sink, || Snapshot::ChainSeeded {
            chain,
            pmin,
            pmax,
            candidates: candidates.clone(),
        });
        Stage::Chain(ChainBuilder::new(chain, pmin, pmax, candidates))
    }

    /// Merge the lower chain (LL → LR) with the reversed upper chain (UR → UL).
    fn finish<T: TraceSink + ?Sized>(&mut self, lower: Vec<PointId>, sink: &mut T) {
        let mut ids = lower;
        ids.extend(self.upper.iter().rev().copied());
        let ids = close_polygon(self.cloud, ids);
        emit(sink, || Snapshot::HullAssembled {
            vertices: ids.clone(),
        });
        let mut hull = Hull::from_ids(self.cloud, ids);
        hull.warnings = std::mem::take(&mut self.warnings);
        self.hull = Some(hull);
    }
}

/// Clean up a closed vertex cycle and orient it.
///
/// - Adjacent equal coordinates (cyclically) collapse to one vertex.
/// - Vertices exactly collinear with both neighbours are removed.
/// - The cycle is made counterclockwise by area sign and rotated to start at
///   the lowest-leftmost vertex.
pub(crate) fn close_polygon(cloud: Cloud<'_>, mut ids: Vec<PointId>) -> Vec<PointId> {
    ids.dedup_by(|a, b| cloud.at(*a) == cloud.at(*b));
    while ids.len() > 1 && cloud.at(ids[0]) == cloud.at(ids[ids.len() - 1]) {
        ids.pop();
    }
    while ids.len() >= 3 {
        let n = ids.len();
        let redundant = (0..n).find(|&k| {
            let prev = cloud.at(ids[(k + n - 1) % n]);
            let next = cloud.at(ids[(k + 1) % n]);
            orientation(prev, cloud.at(ids[k]), next) == Orientation::Collinear
        });
        match redundant {
            Some(k) => {
                ids.remove(k);
            }
            None => break,
        }
    }
    let pts: Vec<Vector2<f64>> = ids.iter().map(|&id| cloud.at(id)).collect();
    if signed_area(&pts) < 0.0 {
        ids.reverse();
    }
    if let Some(start) = (0..ids.len()).min_by(|&i, &j| cmp_xy(&cloud.at(ids[i]), &cloud.at(ids[j])))
    {
        ids.rotate_left(start);
    }
    ids
}

pub(crate) fn check_finite(points: &[Vector2<f64>]) -> Result<(), HullError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(HullError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Strict validation: finite, at least three distinct points, not all collinear.
pub(crate) fn validate_polygon_input(points: &[Vector2<f64>]) -> Result<(), HullError> {
    check_finite(points)?;
    let mut ids: Vec<PointId> = (0..points.len()).map(PointId).collect();
    ids.sort_by(|a, b| cmp_xy(&points[a.0], &points[b.0]));
    ids.dedup_by(|a, b| points[a.0] == points[b.0]);
    let distinct = ids.len();
    if distinct < 3 {
        return Err(HullError::InsufficientPoints { distinct });
    }
    let (first, last) = (ids[0], ids[distinct - 1]);
    let (p, q) = (points[first.0], points[last.0]);
    if ids
        .iter()
        .all(|id| orientation(p, q, points[id.0]) == Orientation::Collinear)
    {
        return Err(HullError::DegenerateInput {
            from: (first, p),
            to: (last, q),
        });
    }
    Ok(())
}

fn run<T: TraceSink + ?Sized>(points: &[Vector2<f64>], cfg: HullCfg, sink: &mut T) -> Hull {
    let mut driver = Driver::new(Cloud::new(points), cfg);
    while !driver.is_done() {
        driver.advance(sink);
    }
    let hull = driver.into_hull().unwrap_or_default();
    tracing::debug!(points = points.len(), vertices = hull.len(), "hull assembled");
    if !hull.warnings.is_empty() {
        tracing::warn!(
            count = hull.warnings.len(),
            eps_tie = cfg.eps_tie,
            "supporting-line ties resolved within the tie band"
        );
    }
    hull
}

/// Kirkpatrick–Seidel hull, permissive on degenerate input.
///
/// Rejects only non-finite coordinates. Empty input gives an empty hull, one
/// point (or identical points) a single vertex, collinear input the two ends
/// of the segment.
pub fn kirkpatrick_seidel(points: &[Vector2<f64>], cfg: &HullCfg) -> Result<Hull, HullError> {
    check_finite(points)?;
    Ok(run(points, *cfg, &mut NoTrace))
}

/// `kirkpatrick_seidel` reporting every phase to `sink`.
pub fn kirkpatrick_seidel_with_sink<T: TraceSink + ?Sized>(
    points: &[Vector2<f64>],
    cfg: &HullCfg,
    sink: &mut T,
) -> Result<Hull, HullError> {
    check_finite(points)?;
    Ok(run(points, *cfg, sink))
}

/// Convex polygon of `points` with default tolerances.
///
/// Errors: `NonFinite`, `InsufficientPoints` (fewer than three distinct points),
/// `DegenerateInput` (all collinear).
pub fn convex_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    validate_polygon_input(points).inspect_err(|err| tracing::debug!(%err, "input rejected"))?;
    Ok(run(points, HullCfg::default(), &mut NoTrace))
}

/// `convex_hull` plus the full snapshot stream.
pub fn convex_hull_traced(points: &[Vector2<f64>]) -> Result<(Hull, Vec<Snapshot>), HullError> {
    validate_polygon_input(points).inspect_err(|err| tracing::debug!(%err, "input rejected"))?;
    let mut trace = Vec::new();
    let hull = run(points, HullCfg::default(), &mut trace);
    Ok((hull, trace))
}
