//! Building blocks for custom motion pipelines.
//!
//! Kernel types, clipped extraction and window resolution for callers that
//! want more than [`MotionEstimator`](crate::MotionEstimator) offers, such as
//! scoring a hand-picked set of displacements.

pub use crate::block::{extract_block, extract_block_clipped};
pub use crate::image::pgm::{decode_pgm_with, load_pgm_with, read_header, save_pgm, PgmHeader};
pub use crate::kernel::scalar::MadScalar;
#[cfg(feature = "simd")]
pub use crate::kernel::simd::MadSimd;
pub use crate::kernel::MadKernel;
pub use crate::search::SearchWindow;
pub use crate::select::{find_best_cell, BestCell};
