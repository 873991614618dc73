//! Error types for blockmotion.

use thiserror::Error;

/// Result alias for blockmotion operations.
pub type MotionResult<T> = std::result::Result<T, MotionError>;

/// Errors that can occur while decoding images or estimating motion.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MotionError {
    /// The image path could not be opened for reading.
    #[error("file {path} not found: {reason}")]
    FileNotFound { path: String, reason: String },
    /// End of stream was reached before all four header lines were read.
    #[error("expected a 4 line pgm header, but reached EOF at line {line}")]
    TruncatedHeader { line: usize },
    /// The header or body does not describe a usable image.
    #[error("malformed image: {reason}")]
    MalformedImage { reason: String },
    /// A read failed after the stream was opened.
    #[error("i/o error: {reason}")]
    Io { reason: String },
    /// Width or height is zero or overflows the address space.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The backing buffer is shorter than the declared layout.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// A requested block rectangle does not fit inside the image.
    #[error(
        "block ({x}, {y}, {width}x{height}) out of bounds for image {img_width}x{img_height}"
    )]
    BlockOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The block index addresses a block below the last image row.
    #[error("block index {index} out of range ({blocks} blocks available)")]
    BlockIndexOutOfRange { index: usize, blocks: usize },
    /// Reference and candidate images differ in size.
    #[error("image dimensions differ: reference {reference:?}, candidate {candidate:?}")]
    DimensionMismatch {
        reference: (usize, usize),
        candidate: (usize, usize),
    },
    /// Decoding through the `image` crate failed.
    #[error("image i/o error: {reason}")]
    ImageIo { reason: String },
}

impl MotionError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedImage {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for MotionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            reason: err.to_string(),
        }
    }
}
