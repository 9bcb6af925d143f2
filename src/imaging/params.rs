//! Parameter types for image operations.
//!
//! These structs describe *what* to write, not *how*. They are the interface
//! between the [`export`](crate::export) step (which decides which files to
//! create) and the [`backend`](super::backend) (which does the encoding). The
//! split lets tests swap in a recording mock without touching export logic.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 100). Clamped on construction.
//! - [`OutputFormat`] — Container to encode into.
//! - [`EncodeParams`] — Output path, format and quality for a single write.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub const MAX: Quality = Quality(100);

    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::MAX
    }
}

/// Encoded file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless; `quality` is ignored and the best compression level is used.
    Png,
    /// Lossy; alpha is dropped before encoding.
    Jpeg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

/// Parameters for writing one image to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeParams {
    pub output: PathBuf,
    pub format: OutputFormat,
    pub quality: Quality,
}
