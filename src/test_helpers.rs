//! Shared test utilities for the tricrop test suite.
//!
//! Provides synthetic source images so tests never depend on fixture files.
//!
//! # Usage
//!
//! ```ignore
//! use crate::config::ExportConfig;
//! use crate::crop::crop_file;
//! use crate::test_helpers::write_banner;
//! use tempfile::TempDir;
//!
//! let tmp = TempDir::new().unwrap();
//! let source = write_banner(tmp.path(), "banner.png", 1280, 480);
//! let report = crop_file(&source, &ExportConfig::default(), None).unwrap();
//! ```

use image::{DynamicImage, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// A horizontal-gradient banner so each slot has distinct pixels.
pub fn banner_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ])
    });
    DynamicImage::ImageRgb8(img)
}

/// Write [`banner_image`] as `dir/name` (format from extension) and return the path.
pub fn write_banner(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    banner_image(width, height).save(&path).unwrap();
    path
}
