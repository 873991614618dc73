//! Block extraction.
//!
//! A [`Block`] is an owned copy of a rectangular region of an image. Blocks
//! are created per candidate during the search and dropped right after being
//! scored.

use crate::image::{ImageView, OwnedImage};
use crate::util::MotionResult;

/// Owned rectangular block of samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    img: OwnedImage,
}

impl Block {
    /// Creates a block from a contiguous row-major buffer.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> MotionResult<Self> {
        let img = OwnedImage::new(data, width, height)?;
        Ok(Self { img })
    }

    /// Returns the block width in pixels.
    pub fn width(&self) -> usize {
        self.img.width()
    }

    /// Returns the block height in pixels.
    pub fn height(&self) -> usize {
        self.img.height()
    }

    /// Returns a borrowed view of the block data.
    pub fn view(&self) -> ImageView<'_, u8> {
        self.img.view()
    }
}

/// Copies the `block_width x block_height` rectangle at `(origin_x, origin_y)`.
///
/// Fails with `BlockOutOfBounds` if the rectangle does not fit in `image`.
pub fn extract_block(
    image: ImageView<'_, u8>,
    origin_x: usize,
    origin_y: usize,
    block_width: usize,
    block_height: usize,
) -> MotionResult<Block> {
    let roi = image.roi(origin_x, origin_y, block_width, block_height)?;
    Block::new(roi.to_contiguous(), roi.width(), roi.height())
}

/// Like [`extract_block`], but shrinks the rectangle to the image edges.
///
/// Only the origin has to be inside `image`.
pub fn extract_block_clipped(
    image: ImageView<'_, u8>,
    origin_x: usize,
    origin_y: usize,
    block_width: usize,
    block_height: usize,
) -> MotionResult<Block> {
    let roi = image.roi_clipped(origin_x, origin_y, block_width, block_height)?;
    Block::new(roi.to_contiguous(), roi.width(), roi.height())
}
