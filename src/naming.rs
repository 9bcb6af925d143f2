//! Output file naming.
//!
//! A source `D/name.ext` writes everything into `D/name/`:
//!
//! ```text
//! D/name/name-1.png
//! D/name/name-1.jpg
//! D/name/name-1_ellipse.png
//! D/name/name-2.png
//! ...
//! ```
//!
//! Only the last extension is stripped, so `shot.final.png` becomes
//! `shot.final`.

use crate::imaging::OutputFormat;
use std::path::{Path, PathBuf};

/// One kind of file written per export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Full-size slot in the given format.
    Full(OutputFormat),
    /// Elliptical cutout, always PNG.
    Ellipse,
}

impl Artifact {
    pub fn format(self) -> OutputFormat {
        match self {
            Artifact::Full(format) => format,
            Artifact::Ellipse => OutputFormat::Png,
        }
    }
}

/// Where a source image's exports go and what they are called.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceName {
    /// Source file name without its extension.
    pub base: String,
    /// Directory containing the source file.
    pub dir: PathBuf,
}

impl SourceName {
    /// Split a source path into its directory and base name.
    ///
    /// A bare file name resolves to the current directory.
    pub fn from_path(path: &Path) -> Self {
        let base = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { base, dir }
    }

    /// Output directory: a sibling folder named after the source.
    pub fn output_dir(&self) -> PathBuf {
        self.dir.join(&self.base)
    }

    /// File name for one artifact of export number `sequence`.
    pub fn file_name(&self, sequence: u32, artifact: Artifact) -> String {
        match artifact {
            Artifact::Full(format) => {
                format!("{}-{}.{}", self.base, sequence, format.extension())
            }
            Artifact::Ellipse => format!("{}-{}_ellipse.png", self.base, sequence),
        }
    }
}
