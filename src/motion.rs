//! Motion estimation entry points.
//!
//! `MotionEstimator` runs the whole pipeline for one block: resolve the
//! search window, build the difference map, select the best vector.

use crate::search::{build_windowed_map, DifferenceMap, SearchConfig, SearchWindow};
use crate::select::{find_best_cell, vector_for_cell, MovementVector};
use crate::trace::{trace_event, trace_span};
use crate::util::MotionResult;
use crate::ImageView;

/// Full result of one estimation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    /// Best displacement.
    pub vector: MovementVector,
    /// MAD score of the best displacement.
    pub score: f64,
    /// Window the search covered.
    pub window: SearchWindow,
    /// Every candidate score.
    pub map: DifferenceMap,
}

/// Block-matching motion estimator.
#[derive(Clone, Debug, Default)]
pub struct MotionEstimator {
    cfg: SearchConfig,
}

impl MotionEstimator {
    /// Creates an estimator with 16x16 blocks and a 16 px radius.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the search configuration.
    pub fn with_config(mut self, cfg: SearchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.cfg
    }

    /// Estimates the displacement of block `block_index` from `reference`
    /// to `candidate`.
    pub fn estimate(
        &self,
        reference: ImageView<'_, u8>,
        candidate: ImageView<'_, u8>,
        block_index: usize,
    ) -> MotionResult<MovementVector> {
        Ok(self.estimate_full(reference, candidate, block_index)?.vector)
    }

    /// Like [`MotionEstimator::estimate`], also returning the map and window.
    pub fn estimate_full(
        &self,
        reference: ImageView<'_, u8>,
        candidate: ImageView<'_, u8>,
        block_index: usize,
    ) -> MotionResult<Estimate> {
        let _span = trace_span!("estimate", block_index = block_index).entered();

        let (window, map) = build_windowed_map(reference, candidate, block_index, &self.cfg)?;
        let best = find_best_cell(&map);
        let vector = vector_for_cell(&map, &best);
        trace_event!(
            "best_vector",
            dx = vector.dx,
            dy = vector.dy,
            score = best.score
        );

        Ok(Estimate {
            vector,
            score: best.score,
            window,
            map,
        })
    }
}

/// Estimates motion for one block with the default configuration.
pub fn estimate_motion(
    reference: ImageView<'_, u8>,
    candidate: ImageView<'_, u8>,
    block_index: usize,
) -> MotionResult<MovementVector> {
    MotionEstimator::new().estimate(reference, candidate, block_index)
}
