//! Difference map storage.

use crate::util::{MotionError, MotionResult};

/// Grid of MAD scores, one per candidate displacement.
///
/// Columns index horizontal displacement and rows vertical displacement.
/// `(center_x, center_y)` is the cell of zero displacement.
#[derive(Clone, Debug, PartialEq)]
pub struct DifferenceMap {
    scores: Vec<f64>,
    width: usize,
    height: usize,
    center_x: usize,
    center_y: usize,
}

impl DifferenceMap {
    /// Wraps a row-major score buffer.
    pub fn new(
        scores: Vec<f64>,
        width: usize,
        height: usize,
        center_x: usize,
        center_y: usize,
    ) -> MotionResult<Self> {
        if width == 0 || height == 0 {
            return Err(MotionError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(MotionError::InvalidDimensions { width, height })?;
        if scores.len() != needed {
            return Err(MotionError::BufferTooSmall {
                needed,
                got: scores.len(),
            });
        }
        if center_x >= width || center_y >= height {
            return Err(MotionError::BlockOutOfBounds {
                x: center_x,
                y: center_y,
                width: 1,
                height: 1,
                img_width: width,
                img_height: height,
            });
        }
        Ok(Self {
            scores,
            width,
            height,
            center_x,
            center_y,
        })
    }

    /// Number of columns (horizontal displacements).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (vertical displacements).
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn center_x(&self) -> usize {
        self.center_x
    }

    pub fn center_y(&self) -> usize {
        self.center_y
    }

    /// Returns the score at `(row, col)`.
    pub fn score(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.scores.get(row * self.width + col).copied()
    }

    /// Returns row `row` of the map.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.scores.get(start..start + self.width)
    }

    /// Returns all scores in row-major order.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }
}
