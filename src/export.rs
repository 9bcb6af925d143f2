//! Writing slot buffers to disk.
//!
//! One [`Exporter`] exists per source image. It owns the output directory,
//! the base name and a sequence counter that advances once per
//! [`Exporter::export`] call, so the three slots of one banner come out as
//! `-1`, `-2`, `-3` no matter which region produced them.

use crate::config::ExportConfig;
use crate::crop::CropError;
use crate::imaging::{EncodeParams, ImageBackend, OutputFormat};
use crate::naming::{Artifact, SourceName};
use image::DynamicImage;
use serde::Serialize;
use std::path::PathBuf;

/// Buffers produced by one slot iteration.
pub struct RegionBuffers<'a> {
    pub cropped: &'a DynamicImage,
    pub ellipse: Option<&'a DynamicImage>,
}

/// Files written by one export call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    pub sequence: u32,
    pub files: Vec<PathBuf>,
}

pub struct Exporter {
    name: SourceName,
    config: ExportConfig,
    count: u32,
}

impl Exporter {
    pub fn new(name: SourceName, config: ExportConfig) -> Self {
        Self {
            name,
            config,
            count: 0,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.name.output_dir()
    }

    /// Write the buffers of one slot and return the paths written.
    ///
    /// Fails with [`CropError::NoFormatSelected`] before touching the counter
    /// or the filesystem when both PNG and JPEG are disabled. The output
    /// directory is created on the first call that gets past that check.
    pub fn export(
        &mut self,
        backend: &impl ImageBackend,
        buffers: &RegionBuffers,
    ) -> Result<ExportRecord, CropError> {
        if !self.config.has_format() {
            return Err(CropError::NoFormatSelected);
        }
        self.count += 1;

        let dir = self.output_dir();
        if !dir.is_dir() {
            std::fs::create_dir_all(&dir)?;
        }

        let mut plan: Vec<(Artifact, &DynamicImage)> = Vec::with_capacity(3);
        if self.config.png {
            plan.push((Artifact::Full(OutputFormat::Png), buffers.cropped));
        }
        if self.config.jpeg {
            plan.push((Artifact::Full(OutputFormat::Jpeg), buffers.cropped));
        }
        if let Some(ellipse) = buffers.ellipse {
            plan.push((Artifact::Ellipse, ellipse));
        }

        let mut files = Vec::with_capacity(plan.len());
        for (artifact, image) in plan {
            let output = dir.join(self.name.file_name(self.count, artifact));
            backend.encode(
                image,
                &EncodeParams {
                    output: output.clone(),
                    format: artifact.format(),
                    quality: self.config.quality(),
                },
            )?;
            files.push(output);
        }

        Ok(ExportRecord {
            sequence: self.count,
            files,
        })
    }
}
