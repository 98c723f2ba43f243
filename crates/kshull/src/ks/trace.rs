//! Snapshot stream for visualizers.
//!
//! The driver reports each phase to a `TraceSink`. Snapshots are built only
//! when `enabled()` is true, so `NoTrace` costs nothing beyond a branch.
//! Slopes in snapshots are in input coordinates (not chain-lifted).

use std::collections::VecDeque;

use super::types::{Bridge, Chain, Extremes};
use crate::geom2::PointId;

/// Ordered pair of points joined during a bridge round (`.0.x < .1.x`).
pub type Segment = (PointId, PointId);

/// One observable phase of the algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum Snapshot {
    /// Input sorted by x; `dropped` were removed as same-ray duplicates.
    Normalized {
        kept: Vec<PointId>,
        dropped: Vec<PointId>,
    },
    ExtremesFound(Extremes),
    /// A chain recursion starts from `pmin`/`pmax` over `candidates`.
    ChainSeeded {
        chain: Chain,
        pmin: PointId,
        pmax: PointId,
        candidates: Vec<PointId>,
    },
    /// A frame chose the vertical split `a` over `points`.
    MedianSplit {
        chain: Chain,
        a: f64,
        points: Vec<PointId>,
    },
    /// One filtering round of the bridge finder. `median_slope`/`support` are
    /// `None` when every pair was vertical; `kept` is the next candidate set.
    BridgeRound {
        chain: Chain,
        a: f64,
        median_slope: Option<f64>,
        small: Vec<Segment>,
        equal: Vec<Segment>,
        large: Vec<Segment>,
        support: Option<Segment>,
        kept: Vec<PointId>,
    },
    BridgeFound {
        chain: Chain,
        a: f64,
        bridge: Bridge,
    },
    /// Points surviving on either side of the bridge (extremes included).
    Partitioned {
        chain: Chain,
        bridge: Bridge,
        left: Vec<PointId>,
        right: Vec<PointId>,
    },
    ChainComplete {
        chain: Chain,
        vertices: Vec<PointId>,
    },
    HullAssembled {
        vertices: Vec<PointId>,
    },
}

impl Snapshot {
    /// Stable phase name.
    pub fn name(&self) -> &'static str {
        match self {
            Snapshot::Normalized { .. } => "normalized",
            Snapshot::ExtremesFound(_) => "extremes-found",
            Snapshot::ChainSeeded { .. } => "chain-seeded",
            Snapshot::MedianSplit { .. } => "median-split",
            Snapshot::BridgeRound { .. } => "bridge-round",
            Snapshot::BridgeFound { .. } => "bridge-found",
            Snapshot::Partitioned { .. } => "partitioned",
            Snapshot::ChainComplete { .. } => "chain-complete",
            Snapshot::HullAssembled { .. } => "hull-assembled",
        }
    }

    /// Chain the phase belongs to, if any.
    pub fn chain(&self) -> Option<Chain> {
        match self {
            Snapshot::ChainSeeded { chain, .. }
            | Snapshot::MedianSplit { chain, .. }
            | Snapshot::BridgeRound { chain, .. }
            | Snapshot::BridgeFound { chain, .. }
            | Snapshot::Partitioned { chain, .. }
            | Snapshot::ChainComplete { chain, .. } => Some(*chain),
            _ => None,
        }
    }
}

/// Receiver of snapshots.
pub trait TraceSink {
    fn enabled(&self) -> bool;
    fn push(&mut self, snap: Snapshot);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn enabled(&self) -> bool {
        false
    }
    #[inline]
    fn push(&mut self, _snap: Snapshot) {}
}

impl TraceSink for Vec<Snapshot> {
    #[inline]
    fn enabled(&self) -> bool {
        true
    }
    #[inline]
    fn push(&mut self, snap: Snapshot) {
        Vec::push(self, snap);
    }
}

impl TraceSink for VecDeque<Snapshot> {
    #[inline]
    fn enabled(&self) -> bool {
        true
    }
    #[inline]
    fn push(&mut self, snap: Snapshot) {
        self.push_back(snap);
    }
}

/// Build and push a snapshot only if the sink records.
#[inline]
pub(crate) fn emit<T: TraceSink + ?Sized>(sink: &mut T, make: impl FnOnce() -> Snapshot) {
    if sink.enabled() {
        sink.push(make());
    }
}
