//! Image processing — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (JPEG, PNG, TIFF, WebP) |
//! | **Crop** | `DynamicImage::crop_imm` after [`Rect::check`] |
//! | **Resize** | `resize_exact` with Lanczos3 |
//! | **Ellipse mask** | `imageproc::drawing::draw_filled_ellipse_mut` at 2×, Lanczos3 down |
//! | **Encode** | PNG (best compression) and JPEG |
//!
//! The module is split into:
//! - **Geometry**: [`Rect`], [`Dimensions`] and crop validation (unit testable)
//! - **Parameters**: Data structures describing encode operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations / mask**: In-memory raster transforms

pub mod backend;
mod geometry;
pub mod mask;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use geometry::{Dimensions, Rect, ValidationError};
pub use mask::{ellipse_cutout, ellipse_mask};
pub use operations::{crop, get_dimensions, resize};
pub use params::{EncodeParams, OutputFormat, Quality};
pub use rust_backend::RustBackend;
