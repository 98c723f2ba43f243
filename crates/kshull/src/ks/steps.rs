use std::collections::VecDeque;
use std::iter::FusedIterator;

use nalgebra::Vector2;

use super::assemble::{check_finite, Driver};
use super::trace::{NoTrace, Snapshot};
use super::types::Hull;
use crate::error::HullError;
use crate::geom2::{Cloud, HullCfg};

/// Resumable Kirkpatrick–Seidel run yielding one `Snapshot` per phase.
///
/// Stopping early and calling `into_hull` finishes the run untraced; the hull
/// is identical to `kirkpatrick_seidel` on the same input and config.
pub struct HullSteps<'a> {
    driver: Driver<'a>,
    pending: VecDeque<Snapshot>,
}

impl<'a> HullSteps<'a> {
    /// Same acceptance rules as `kirkpatrick_seidel`.
    pub fn new(points: &'a [Vector2<f64>], cfg: HullCfg) -> Result<Self, HullError> {
        check_finite(points)?;
        Ok(Self {
            driver: Driver::new(Cloud::new(points), cfg),
            pending: VecDeque::new(),
        })
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.driver.is_done() && self.pending.is_empty()
    }

    /// Run the remaining phases and return the hull.
    pub fn into_hull(mut self) -> Hull {
        while !self.driver.is_done() {
            self.driver.advance(&mut NoTrace);
        }
        self.driver.into_hull().unwrap_or_default()
    }
}

impl Iterator for HullSteps<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        while self.pending.is_empty() && !self.driver.is_done() {
            self.driver.advance(&mut self.pending);
        }
        self.pending.pop_front()
    }
}

impl FusedIterator for HullSteps<'_> {}
