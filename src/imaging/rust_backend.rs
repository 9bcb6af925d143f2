//! Pure Rust codec backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with format sniffing |
//! | Encode → PNG | `image::codecs::png::PngEncoder`, best compression, adaptive filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at the requested quality |

use super::backend::{BackendError, ImageBackend};
use super::params::{EncodeParams, OutputFormat};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, ImageReader};
use std::io::BufWriter;
use std::path::Path;

/// Pure Rust backend using the `image` crate codecs.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn create_writer(path: &Path) -> Result<BufWriter<std::fs::File>, BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    Ok(BufWriter::new(file))
}

fn save_png(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    let encoder = PngEncoder::new_with_quality(
        create_writer(path)?,
        CompressionType::Best,
        PngFilter::Adaptive,
    );
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))
}

/// JPEG has no alpha channel, so RGBA and LA sources are flattened first.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let encoder = JpegEncoder::new_with_quality(create_writer(path)?, quality as u8);
    let rgb = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => None,
        other => Some(DynamicImage::ImageRgb8(other.to_rgb8())),
    };
    rgb.as_ref()
        .unwrap_or(img)
        .write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "Failed to decode {}: {}",
                    path.display(),
                    e
                ))
            })
    }

    fn encode(&self, image: &DynamicImage, params: &EncodeParams) -> Result<(), BackendError> {
        match params.format {
            OutputFormat::Png => save_png(image, &params.output),
            OutputFormat::Jpeg => save_jpeg(image, &params.output, params.quality.value()),
        }
    }
}
