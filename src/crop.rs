//! Per-image slot pipeline.
//!
//! A [`Cropper`] owns one decoded source image and walks the three fixed
//! [`Region`]s in order:
//!
//! ```text
//! load → for each slot: validate → crop → resize → ellipse → export → drop buffers
//!      → release source
//! ```
//!
//! ## Failure Semantics
//!
//! The first invalid slot rectangle aborts the run for that image. Files
//! already written for earlier slots stay on disk; nothing is retried.
//!
//! ## Memory
//!
//! At most one source image, one slot buffer and one ellipse buffer are alive
//! at a time. Slot buffers are dropped at the end of each iteration, the
//! source when the cropper is closed.
//!
//! ## Progress
//!
//! Each step emits a [`CropEvent`] on the optional channel passed to
//! [`Cropper::open`]. Rendering lives in [`output`](crate::output).

use crate::config::{ConfigError, ExportConfig};
use crate::export::{ExportRecord, Exporter, RegionBuffers};
use crate::imaging::{
    BackendError, Dimensions, ImageBackend, Rect, RustBackend, ValidationError, crop,
    ellipse_cutout, get_dimensions, resize,
};
use crate::naming::SourceName;
use crate::regions::{Region, RegionConfig};
use image::DynamicImage;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("Unable to find image file at: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Either PNG or JPEG must be enabled")]
    NoFormatSelected,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Progress reported while a source image is processed.
#[derive(Debug, Clone, PartialEq)]
pub enum CropEvent {
    Loaded {
        name: String,
        dimensions: Dimensions,
    },
    Cropped {
        name: String,
        region: Region,
        dimensions: Dimensions,
    },
    Resized {
        name: String,
        region: Region,
        dimensions: Dimensions,
    },
    Ellipse {
        name: String,
        region: Region,
        dimensions: Dimensions,
    },
    Exported {
        name: String,
        region: Region,
        record: ExportRecord,
    },
    Done {
        name: String,
    },
    Released {
        name: String,
    },
}

/// Exports written for one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotExport {
    pub region: Region,
    #[serde(flatten)]
    pub record: ExportRecord,
}

/// Outcome of a complete run over one source image.
#[derive(Debug, Clone, Serialize)]
pub struct CropReport {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub dimensions: Dimensions,
    pub config: ExportConfig,
    pub slots: Vec<SlotExport>,
}

/// Pipeline state for one source image.
pub struct Cropper<'a, B: ImageBackend> {
    backend: &'a B,
    name: String,
    image: DynamicImage,
    bounds: Rect,
    exporter: Exporter,
    events: Option<Sender<CropEvent>>,
}

impl<'a, B: ImageBackend> Cropper<'a, B> {
    /// Decode `path` and prepare an exporter next to it.
    ///
    /// `config` is validated before the source is looked at.
    pub fn open(
        backend: &'a B,
        path: &Path,
        config: ExportConfig,
        events: Option<Sender<CropEvent>>,
    ) -> Result<Self, CropError> {
        config.validate()?;
        if !path.exists() {
            return Err(CropError::SourceNotFound(path.to_path_buf()));
        }
        let source = SourceName::from_path(path);
        let image = backend.decode(path)?;
        let dimensions = get_dimensions(&image);

        let cropper = Self {
            backend,
            name: source.base.clone(),
            image,
            bounds: Rect::from_dimensions(dimensions),
            exporter: Exporter::new(source, config),
            events,
        };
        cropper.emit(CropEvent::Loaded {
            name: cropper.name.clone(),
            dimensions,
        });
        Ok(cropper)
    }

    /// Source size as read at load time.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.bounds.width() as u32, self.bounds.height() as u32)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.exporter.output_dir()
    }

    /// Run one slot end to end and export its files.
    pub fn crop_region(&mut self, config: &RegionConfig) -> Result<ExportRecord, CropError> {
        self.bounds.check(&config.rect)?;

        let cropped = crop(&self.image, &config.rect);
        self.emit(CropEvent::Cropped {
            name: self.name.clone(),
            region: config.region,
            dimensions: get_dimensions(&cropped),
        });

        let cropped = resize(&cropped, config.size);
        self.emit(CropEvent::Resized {
            name: self.name.clone(),
            region: config.region,
            dimensions: config.size,
        });

        let ellipse = DynamicImage::ImageRgba8(ellipse_cutout(&cropped, config.size));
        self.emit(CropEvent::Ellipse {
            name: self.name.clone(),
            region: config.region,
            dimensions: config.size,
        });

        let record = self.exporter.export(
            self.backend,
            &RegionBuffers {
                cropped: &cropped,
                ellipse: Some(&ellipse),
            },
        )?;
        drop(ellipse);
        drop(cropped);

        self.emit(CropEvent::Exported {
            name: self.name.clone(),
            region: config.region,
            record: record.clone(),
        });
        Ok(record)
    }

    /// Run every slot in order, stopping at the first failure.
    pub fn crop_all(&mut self) -> Result<Vec<SlotExport>, CropError> {
        let mut slots = Vec::with_capacity(Region::ALL.len());
        for region in Region::ALL {
            let record = self.crop_region(&region.config())?;
            slots.push(SlotExport { region, record });
        }
        self.emit(CropEvent::Done {
            name: self.name.clone(),
        });
        Ok(slots)
    }

    /// Release the source image.
    pub fn close(self) {
        self.emit(CropEvent::Released {
            name: self.name.clone(),
        });
    }

    fn emit(&self, event: CropEvent) {
        if let Some(tx) = &self.events {
            // A dropped receiver only means nobody is listening.
            tx.send(event).ok();
        }
    }
}

/// Process one source image with the default backend.
pub fn crop_file(
    path: &Path,
    config: &ExportConfig,
    events: Option<Sender<CropEvent>>,
) -> Result<CropReport, CropError> {
    crop_file_with_backend(&RustBackend::new(), path, config, events)
}

/// Process one source image using a specific backend (allows testing with mock).
pub fn crop_file_with_backend(
    backend: &impl ImageBackend,
    path: &Path,
    config: &ExportConfig,
    events: Option<Sender<CropEvent>>,
) -> Result<CropReport, CropError> {
    let mut cropper = Cropper::open(backend, path, config.clone(), events)?;
    let slots = cropper.crop_all();
    let dimensions = cropper.dimensions();
    let output_dir = cropper.output_dir();
    cropper.close();

    Ok(CropReport {
        source: path.to_path_buf(),
        output_dir,
        dimensions,
        config: config.clone(),
        slots: slots?,
    })
}
