//! Loading frames through the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Any format the crate
//! decodes (PNG, PNM) is converted to 8-bit luma; saving goes the other way.

use crate::image::OwnedImage;
use crate::util::{MotionError, MotionResult};
use std::path::Path;

/// Creates an owned image from a grayscale image buffer.
pub fn owned_from_gray_image(img: &image::GrayImage) -> MotionResult<OwnedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedImage::new(img.as_raw().clone(), width, height)
}

/// Loads an image from disk and converts it to grayscale.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> MotionResult<OwnedImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MotionError::FileNotFound {
            path: path.display().to_string(),
            reason: "no such file".to_owned(),
        });
    }
    let img = image::open(path).map_err(|err| MotionError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_gray_image(&img.to_luma8())
}

/// Converts an owned image into an `image::GrayImage`.
pub fn to_gray_image(img: &OwnedImage) -> MotionResult<image::GrayImage> {
    let width = u32::try_from(img.width()).map_err(|_| MotionError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    let height = u32::try_from(img.height()).map_err(|_| MotionError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    image::GrayImage::from_raw(width, height, img.data().to_vec()).ok_or(
        MotionError::BufferTooSmall {
            needed: img.width() * img.height(),
            got: img.data().len(),
        },
    )
}

/// Saves `img` as 8-bit luma; the format follows the path extension.
pub fn save_gray_image<P: AsRef<Path>>(img: &OwnedImage, path: P) -> MotionResult<()> {
    to_gray_image(img)?
        .save(path)
        .map_err(|err| MotionError::ImageIo {
            reason: err.to_string(),
        })
}
