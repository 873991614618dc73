//! Exhaustive block-matching search.
//!
//! [`build_difference_map`] extracts the reference block, resolves the
//! clipped [`SearchWindow`] and scores every candidate displacement with the
//! MAD kernel. Blocks touching the right or bottom image edge are clipped to
//! the image, and the kernel compares their overlapping region.

mod map;
mod window;

pub use map::DifferenceMap;
pub use window::SearchWindow;

use crate::block::extract_block_clipped;
use crate::kernel::{ActiveMad, MadKernel};
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::MotionResult;
use crate::ImageView;

/// Nominal block edge length in pixels.
pub const DEFAULT_BLOCK_SIZE: usize = 16;

/// Nominal search radius in pixels.
pub const DEFAULT_SEARCH_RADIUS: usize = 16;

/// Per-direction search radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchRadius {
    pub left: usize,
    pub right: usize,
    pub up: usize,
    pub down: usize,
}

impl SearchRadius {
    /// Same radius in every direction.
    pub fn uniform(radius: usize) -> Self {
        Self {
            left: radius,
            right: radius,
            up: radius,
            down: radius,
        }
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self::uniform(DEFAULT_SEARCH_RADIUS)
    }
}

/// Configuration for the block search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Block width in pixels.
    pub block_width: usize,
    /// Block height in pixels.
    pub block_height: usize,
    /// Maximum displacement in each direction.
    pub radius: SearchRadius,
    /// Score map rows in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            block_width: DEFAULT_BLOCK_SIZE,
            block_height: DEFAULT_BLOCK_SIZE,
            radius: SearchRadius::default(),
            parallel: false,
        }
    }
}

/// Builds the MAD map for block `block_index` of `reference`.
pub fn build_difference_map(
    reference: ImageView<'_, u8>,
    candidate: ImageView<'_, u8>,
    block_index: usize,
    cfg: &SearchConfig,
) -> MotionResult<DifferenceMap> {
    build_windowed_map(reference, candidate, block_index, cfg).map(|(_, map)| map)
}

/// Builds the map and returns it together with the window it covers.
pub(crate) fn build_windowed_map(
    reference: ImageView<'_, u8>,
    candidate: ImageView<'_, u8>,
    block_index: usize,
    cfg: &SearchConfig,
) -> MotionResult<(SearchWindow, DifferenceMap)> {
    let window = SearchWindow::resolve(reference, candidate, block_index, cfg)?;
    let _span = trace_span!(
        "build_difference_map",
        block_index = block_index,
        cols = window.width(),
        rows = window.height()
    )
    .entered();
    trace_event!(
        "search_window",
        origin_x = window.origin_x,
        origin_y = window.origin_y,
        left = window.left,
        right = window.right,
        up = window.up,
        down = window.down
    );

    let reference_block = extract_block_clipped(
        reference,
        window.origin_x,
        window.origin_y,
        cfg.block_width,
        cfg.block_height,
    )?;

    let scores = if cfg.parallel {
        score_window_parallel(reference_block.view(), candidate, &window, cfg)?
    } else {
        score_window(reference_block.view(), candidate, &window, cfg)?
    };

    let map = DifferenceMap::new(scores, window.width(), window.height(), window.left, window.up)?;
    Ok((window, map))
}

fn score_window(
    reference_block: ImageView<'_, u8>,
    candidate: ImageView<'_, u8>,
    window: &SearchWindow,
    cfg: &SearchConfig,
) -> MotionResult<Vec<f64>> {
    let mut scores = Vec::with_capacity(window.width() * window.height());
    for row in 0..window.height() {
        scores.extend(score_row(reference_block, candidate, window, cfg, row)?);
    }
    Ok(scores)
}

#[cfg(feature = "rayon")]
fn score_window_parallel(
    reference_block: ImageView<'_, u8>,
    candidate: ImageView<'_, u8>,
    window: &SearchWindow,
    cfg: &SearchConfig,
) -> MotionResult<Vec<f64>> {
    crate::kernel::rayon::score_window_par(reference_block, candidate, window, cfg)
}

#[cfg(not(feature = "rayon"))]
fn score_window_parallel(
    reference_block: ImageView<'_, u8>,
    candidate: ImageView<'_, u8>,
    window: &SearchWindow,
    cfg: &SearchConfig,
) -> MotionResult<Vec<f64>> {
    score_window(reference_block, candidate, window, cfg)
}

/// Scores one row of the map: every horizontal displacement at one vertical
/// displacement.
pub(crate) fn score_row(
    reference_block: ImageView<'_, u8>,
    candidate: ImageView<'_, u8>,
    window: &SearchWindow,
    cfg: &SearchConfig,
    row: usize,
) -> MotionResult<Vec<f64>> {
    let mut scores = Vec::with_capacity(window.width());
    for col in 0..window.width() {
        let (x, y) = window.candidate_origin(row, col);
        let block = extract_block_clipped(candidate, x, y, cfg.block_width, cfg.block_height)?;
        scores.push(ActiveMad::mad(reference_block, block.view()));
    }
    trace_debug!("row_scored", row = row, cols = scores.len());
    Ok(scores)
}
