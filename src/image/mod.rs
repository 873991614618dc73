//! Grayscale image containers.
//!
//! `ImageView` is a borrowed 2D view into a 1D sample buffer with an explicit
//! stride (elements between consecutive row starts). `OwnedImage` owns a
//! contiguous buffer and hands out views. Sub-rectangles taken with
//! [`ImageView::roi`] share the backing slice and keep the parent stride.

use crate::util::{MotionError, MotionResult};

#[cfg(feature = "image-io")]
pub mod io;
pub mod pgm;

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> MotionResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> MotionResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(MotionError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx)
    }

    /// Returns row `y` as a slice of length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy view of the rectangle at `(x, y)`.
    ///
    /// The whole rectangle must lie inside the view.
    pub fn roi(&self, x: usize, y: usize, width: usize, height: usize) -> MotionResult<Self> {
        if width == 0 || height == 0 {
            return Err(MotionError::InvalidDimensions { width, height });
        }
        let out_of_bounds = MotionError::BlockOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or_else(|| out_of_bounds.clone())?;
        let end_y = y.checked_add(height).ok_or_else(|| out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(MotionError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self.data.get(start..).ok_or(MotionError::BufferTooSmall {
            needed: start.saturating_add(1),
            got: self.data.len(),
        })?;

        ImageView::new(data, width, height, self.stride)
    }

    /// Returns the rectangle at `(x, y)` clipped to the view.
    ///
    /// The origin itself must be inside the view; the extent shrinks to fit.
    pub fn roi_clipped(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> MotionResult<Self> {
        if x >= self.width || y >= self.height {
            return Err(MotionError::BlockOutOfBounds {
                x,
                y,
                width,
                height,
                img_width: self.width,
                img_height: self.height,
            });
        }
        let width = width.min(self.width - x);
        let height = height.min(self.height - y);
        self.roi(x, y, width, height)
    }
}

impl<T: Copy> ImageView<'_, T> {
    /// Copies the view into a contiguous buffer without row padding.
    pub fn to_contiguous(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            let start = y * self.stride;
            out.extend_from_slice(&self.data[start..start + self.width]);
        }
        out
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> MotionResult<usize> {
    if width == 0 || height == 0 {
        return Err(MotionError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(MotionError::InvalidStride { width, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(MotionError::InvalidDimensions { width, height })
}

/// Owned contiguous grayscale image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl OwnedImage {
    /// Wraps a row-major buffer of exactly `width * height` samples.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> MotionResult<Self> {
        if width == 0 || height == 0 {
            return Err(MotionError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(MotionError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(MotionError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(MotionError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds an image by evaluating `f(x, y)` for every sample.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> u8,
    ) -> MotionResult<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(MotionError::InvalidDimensions { width, height })?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::new(data, width, height)
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major sample buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_, u8> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}
