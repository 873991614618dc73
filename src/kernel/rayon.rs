//! Rayon-parallel map scoring (feature-gated).
//!
//! Map rows are independent, so each rayon task scores one row. Rows are
//! collected in order, which keeps the map identical to the sequential build.

use crate::search::{score_row, SearchConfig, SearchWindow};
use crate::util::MotionResult;
use crate::ImageView;
use rayon::prelude::*;

/// Row-parallel equivalent of the sequential window scan.
pub(crate) fn score_window_par(
    reference_block: ImageView<'_, u8>,
    candidate: ImageView<'_, u8>,
    window: &SearchWindow,
    cfg: &SearchConfig,
) -> MotionResult<Vec<f64>> {
    let rows: Vec<Vec<f64>> = (0..window.height())
        .into_par_iter()
        .map(|row| score_row(reference_block, candidate, window, cfg, row))
        .collect::<MotionResult<_>>()?;
    Ok(rows.into_iter().flatten().collect())
}
