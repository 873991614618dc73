//! Search window resolution.
//!
//! Blocks are numbered row-major in units of the block size. The window
//! extends up to the configured radius in each direction and is clipped so
//! that every candidate origin lies inside the candidate image.

use crate::search::SearchConfig;
use crate::util::{MotionError, MotionResult};
use crate::ImageView;

/// Resolved reference origin and clipped offsets for one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchWindow {
    /// Pixel-space origin of the reference block.
    pub origin_x: usize,
    pub origin_y: usize,
    /// Clipped offsets from the origin in each direction.
    pub left: usize,
    pub right: usize,
    pub up: usize,
    pub down: usize,
}

impl SearchWindow {
    /// Resolves the window for `block_index`.
    ///
    /// Both images must have the same dimensions.
    pub fn resolve(
        reference: ImageView<'_, u8>,
        candidate: ImageView<'_, u8>,
        block_index: usize,
        cfg: &SearchConfig,
    ) -> MotionResult<Self> {
        let ref_size = (reference.width(), reference.height());
        let cand_size = (candidate.width(), candidate.height());
        if ref_size != cand_size {
            return Err(MotionError::DimensionMismatch {
                reference: ref_size,
                candidate: cand_size,
            });
        }
        if cfg.block_width == 0 || cfg.block_height == 0 {
            return Err(MotionError::InvalidDimensions {
                width: cfg.block_width,
                height: cfg.block_height,
            });
        }

        let blocks_per_row = reference.width() / cfg.block_width;
        if blocks_per_row == 0 {
            return Err(MotionError::malformed(format!(
                "image width {} is smaller than one block ({})",
                reference.width(),
                cfg.block_width
            )));
        }
        let block_rows = reference.height().div_ceil(cfg.block_height);
        let out_of_range = MotionError::BlockIndexOutOfRange {
            index: block_index,
            blocks: blocks_per_row.saturating_mul(block_rows),
        };

        let origin_x = (block_index % blocks_per_row) * cfg.block_width;
        let origin_y = (block_index / blocks_per_row)
            .checked_mul(cfg.block_height)
            .ok_or_else(|| out_of_range.clone())?;
        if origin_y >= reference.height() {
            return Err(out_of_range);
        }

        let radius = cfg.radius;
        Ok(Self {
            origin_x,
            origin_y,
            left: radius.left.min(origin_x),
            up: radius.up.min(origin_y),
            right: radius.right.min(candidate.width() - origin_x - 1),
            down: radius.down.min(candidate.height() - origin_y - 1),
        })
    }

    /// Left edge of the window in pixels.
    pub fn start_x(&self) -> usize {
        self.origin_x - self.left
    }

    /// Top edge of the window in pixels.
    pub fn start_y(&self) -> usize {
        self.origin_y - self.up
    }

    /// Number of horizontal displacements, i.e. map columns.
    pub fn width(&self) -> usize {
        self.left + self.right + 1
    }

    /// Number of vertical displacements, i.e. map rows.
    pub fn height(&self) -> usize {
        self.up + self.down + 1
    }

    /// Candidate origin for map cell `(row, col)`.
    pub fn candidate_origin(&self, row: usize, col: usize) -> (usize, usize) {
        (self.start_x() + col, self.start_y() + row)
    }
}
