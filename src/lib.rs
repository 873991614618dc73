//! blockmotion estimates inter-frame motion with exhaustive block matching.
//!
//! Given a reference frame and a later frame of the same size, the estimator
//! takes one 16x16 block of the reference, scores every displacement within a
//! clipped search window by mean absolute difference (MAD), and reports the
//! displacement with the lowest score. Ties resolve to the first candidate in
//! row-major order.
//!
//! Frames are read from binary PGM-style files with [`crate::image::pgm`]; the
//! optional `image-io` feature adds loading through the `image` crate.
//! `rayon` scores map rows in parallel and `simd` vectorizes the MAD kernel;
//! both produce results identical to the scalar path.

pub mod block;
pub mod histogram;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod motion;
pub mod search;
pub mod select;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use crate::block::{extract_block, extract_block_clipped, Block};
pub use crate::histogram::IntensityHistogram;
pub use crate::image::pgm::{decode_pgm, encode_pgm, load_pgm, BodyPolicy, DecodeOptions};
pub use crate::image::{ImageView, OwnedImage};
pub use crate::kernel::mean_absolute_difference;
pub use crate::motion::{estimate_motion, Estimate, MotionEstimator};
pub use crate::search::{
    build_difference_map, DifferenceMap, SearchConfig, SearchRadius, SearchWindow,
};
pub use crate::select::{select_best_vector, MovementVector};
pub use crate::util::{MotionError, MotionResult};
