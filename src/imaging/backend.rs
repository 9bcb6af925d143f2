//! Image codec backend trait and shared error type.
//!
//! The [`ImageBackend`] trait covers the two operations that touch encoded
//! bytes: decoding a source file and encoding a raster to disk. Pixel work
//! (crop, resize, masking) happens on in-memory buffers in
//! [`operations`](super::operations) and needs no backend.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate's pure Rust codecs.

use super::params::EncodeParams;
use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image codec backends.
pub trait ImageBackend {
    /// Decode the image at `path` into memory.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Encode `image` and write it according to `params`.
    fn encode(&self, image: &DynamicImage, params: &EncodeParams) -> Result<(), BackendError>;
}
