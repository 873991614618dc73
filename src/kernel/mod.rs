//! Mean absolute difference kernels.
//!
//! Every kernel compares the overlapping top-left region of two views:
//! `min(a.width, b.width) x min(a.height, b.height)` samples. Views cannot
//! have zero area, so the mean is always defined.

use crate::block::Block;
use crate::ImageView;

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(not(feature = "simd"))]
pub(crate) use scalar::MadScalar as ActiveMad;
#[cfg(feature = "simd")]
pub(crate) use simd::MadSimd as ActiveMad;

/// Kernel trait for block similarity.
pub trait MadKernel {
    /// Returns the sum of absolute differences over the overlapping region.
    fn sad(a: ImageView<'_, u8>, b: ImageView<'_, u8>) -> u64;

    /// Returns the mean absolute difference over the overlapping region.
    fn mad(a: ImageView<'_, u8>, b: ImageView<'_, u8>) -> f64 {
        let (width, height) = overlap(a, b);
        Self::sad(a, b) as f64 / (width * height) as f64
    }
}

/// Size of the region two views are compared over.
pub(crate) fn overlap(a: ImageView<'_, u8>, b: ImageView<'_, u8>) -> (usize, usize) {
    (a.width().min(b.width()), a.height().min(b.height()))
}

/// Mean absolute difference between two blocks.
///
/// Lower is more similar; identical blocks score `0.0`. The result does not
/// depend on argument order.
pub fn mean_absolute_difference(a: &Block, b: &Block) -> f64 {
    ActiveMad::mad(a.view(), b.view())
}
