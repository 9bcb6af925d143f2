//! High-level raster operations.
//!
//! These functions work on decoded buffers only. Bounds checking happens
//! up front, through [`Rect::check`]; [`crop`] assumes it has been done.

use super::geometry::{Dimensions, Rect};
use image::DynamicImage;
use image::imageops::FilterType;

/// Dimensions of a decoded image.
pub fn get_dimensions(image: &DynamicImage) -> Dimensions {
    Dimensions::new(image.width(), image.height())
}

/// Cut `rect` out of `image`. `rect` must already be validated.
pub fn crop(image: &DynamicImage, rect: &Rect) -> DynamicImage {
    image.crop_imm(
        rect.left() as u32,
        rect.top() as u32,
        rect.width() as u32,
        rect.height() as u32,
    )
}

/// Resample to exactly `size` with Lanczos3, ignoring aspect ratio.
pub fn resize(image: &DynamicImage, size: Dimensions) -> DynamicImage {
    image.resize_exact(size.width, size.height, FilterType::Lanczos3)
}
