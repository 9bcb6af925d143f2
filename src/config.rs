//! Export configuration.
//!
//! Controls which full-size formats are written for each slot and the lossy
//! encoding quality. There is no config file: the CLI always runs with
//! [`ExportConfig::default`], and library callers build their own.
//!
//! ## Options
//!
//! ```text
//! png      true   Write <name>-<n>.png
//! jpeg     true   Write <name>-<n>.jpg
//! quality  100    JPEG quality (1-100)
//! ```
//!
//! The ellipse cutout is always written as PNG, whatever `png` says.
//! Disabling both `png` and `jpeg` is accepted here but every export then
//! fails with [`CropError::NoFormatSelected`](crate::crop::CropError).
//!
//! [`Cropper::open`](crate::crop::Cropper::open) runs [`ExportConfig::validate`]
//! before touching the source, so an out-of-range quality is reported as
//! [`CropError::Config`](crate::crop::CropError) instead of being clamped.

use crate::imaging::Quality;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Which files to write and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportConfig {
    /// Write a full-size PNG per slot.
    pub png: bool,
    /// Write a full-size JPEG per slot.
    pub jpeg: bool,
    /// JPEG quality, 1-100.
    pub quality: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            png: true,
            jpeg: true,
            quality: Quality::MAX.value(),
        }
    }
}

impl ExportConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::Validation("quality must be 1-100".into()));
        }
        Ok(())
    }

    pub fn quality(&self) -> Quality {
        Quality::new(self.quality)
    }

    /// Whether at least one full-size format is enabled.
    pub fn has_format(&self) -> bool {
        self.png || self.jpeg
    }
}
