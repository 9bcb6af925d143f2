//! CLI output formatting.
//!
//! # Progress Lines
//!
//! Every line is prefixed with the source base name in brackets so output
//! from a batch stays readable:
//!
//! ```text
//! [banner] Loaded: [W: 1280, H: 480]
//! [banner] Cropped: [W: 450, H: 451]
//! [banner] Resized: [W: 450, H: 450]
//! [banner] Ellipse: [W: 450, H: 450]
//! [banner] Exported #1 (left)
//!     banner-1.png
//!     banner-1.jpg
//!     banner-1_ellipse.png
//! ...
//! [banner] Done.
//! [banner] Released.
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and are pure for testability;
//! `print_*` wrappers write to stdout or stderr.

use crate::batch::{BatchEvent, BatchOutcome};
use crate::crop::{CropError, CropEvent, CropReport};
use crate::imaging::Dimensions;
use std::path::Path;

fn size(dims: &Dimensions) -> String {
    format!("[W: {}, H: {}]", dims.width, dims.height)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format a single progress event as display lines.
pub fn format_crop_event(event: &CropEvent) -> Vec<String> {
    match event {
        CropEvent::Loaded { name, dimensions } => {
            vec![format!("[{}] Loaded: {}", name, size(dimensions))]
        }
        CropEvent::Cropped {
            name, dimensions, ..
        } => vec![format!("[{}] Cropped: {}", name, size(dimensions))],
        CropEvent::Resized {
            name, dimensions, ..
        } => vec![format!("[{}] Resized: {}", name, size(dimensions))],
        CropEvent::Ellipse {
            name, dimensions, ..
        } => vec![format!("[{}] Ellipse: {}", name, size(dimensions))],
        CropEvent::Exported {
            name,
            region,
            record,
        } => {
            let mut lines = vec![format!(
                "[{}] Exported #{} ({})",
                name,
                record.sequence,
                region.label()
            )];
            lines.extend(
                record
                    .files
                    .iter()
                    .map(|f| format!("    {}", file_name(f))),
            );
            lines
        }
        CropEvent::Done { name } => vec![format!("[{}] Done.", name)],
        CropEvent::Released { name } => vec![format!("[{}] Released.", name)],
    }
}

/// Format the failure of one source file.
pub fn format_failure(source: &Path, error: &CropError) -> String {
    format!("[{}] Failed: {}", file_name(source), error)
}

fn plural(n: usize, word: &str) -> String {
    format!("{} {}{}", n, word, if n == 1 { "" } else { "s" })
}

/// Format the end-of-batch summary.
pub fn format_summary(outcome: &BatchOutcome) -> Vec<String> {
    let files: usize = outcome
        .reports
        .iter()
        .flat_map(|r| &r.slots)
        .map(|s| s.record.files.len())
        .sum();
    let mut lines = vec![format!(
        "Processed {}, wrote {}",
        plural(outcome.reports.len(), "image"),
        plural(files, "file"),
    )];
    if !outcome.failures.is_empty() {
        lines.push(format!("{} failed", plural(outcome.failures.len(), "image")));
    }
    if !outcome.skipped.is_empty() {
        lines.push(format!("{} skipped", plural(outcome.skipped.len(), "image")));
    }
    lines
}

/// Pretty JSON array with one report per successfully processed source.
pub fn format_json_report(reports: &[CropReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

/// Print a progress event to stdout.
pub fn print_crop_event(event: &CropEvent) {
    for line in format_crop_event(event) {
        println!("{}", line);
    }
}

/// Print a batch event: progress to stdout (unless `quiet`), failures to stderr.
pub fn print_batch_event(event: &BatchEvent, quiet: bool) {
    match event {
        BatchEvent::Progress(e) if !quiet => print_crop_event(e),
        BatchEvent::Progress(_) => {}
        BatchEvent::Failed { source, error } => print_failure(source, error),
    }
}

/// Print a per-file failure to stderr.
pub fn print_failure(source: &Path, error: &CropError) {
    eprintln!("{}", format_failure(source, error));
}

/// Print the batch summary to stdout.
pub fn print_summary(outcome: &BatchOutcome) {
    for line in format_summary(outcome) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchFailure;
    use crate::config::ExportConfig;
    use crate::crop::SlotExport;
    use crate::export::ExportRecord;
    use crate::imaging::ValidationError;
    use crate::regions::Region;
    use std::path::PathBuf;

    fn record(seq: u32) -> ExportRecord {
        ExportRecord {
            sequence: seq,
            files: vec![
                PathBuf::from(format!("/p/banner/banner-{seq}.png")),
                PathBuf::from(format!("/p/banner/banner-{seq}.jpg")),
                PathBuf::from(format!("/p/banner/banner-{seq}_ellipse.png")),
            ],
        }
    }

    #[test]
    fn loaded_line() {
        let lines = format_crop_event(&CropEvent::Loaded {
            name: "banner".into(),
            dimensions: Dimensions::new(1280, 480),
        });
        assert_eq!(lines, vec!["[banner] Loaded: [W: 1280, H: 480]"]);
    }

    #[test]
    fn cropped_resized_ellipse_lines() {
        let dims = Dimensions::new(450, 451);
        let name = String::from("banner");
        let cropped = CropEvent::Cropped {
            name: name.clone(),
            region: Region::Left,
            dimensions: dims,
        };
        let resized = CropEvent::Resized {
            name: name.clone(),
            region: Region::Left,
            dimensions: Dimensions::new(450, 450),
        };
        let ellipse = CropEvent::Ellipse {
            name,
            region: Region::Left,
            dimensions: Dimensions::new(450, 450),
        };
        assert_eq!(
            format_crop_event(&cropped),
            vec!["[banner] Cropped: [W: 450, H: 451]"]
        );
        assert_eq!(
            format_crop_event(&resized),
            vec!["[banner] Resized: [W: 450, H: 450]"]
        );
        assert_eq!(
            format_crop_event(&ellipse),
            vec!["[banner] Ellipse: [W: 450, H: 450]"]
        );
    }

    #[test]
    fn exported_lists_file_names() {
        let lines = format_crop_event(&CropEvent::Exported {
            name: "banner".into(),
            region: Region::Center,
            record: record(2),
        });
        assert_eq!(
            lines,
            vec![
                "[banner] Exported #2 (center)",
                "    banner-2.png",
                "    banner-2.jpg",
                "    banner-2_ellipse.png",
            ]
        );
    }

    #[test]
    fn done_and_released_lines() {
        assert_eq!(
            format_crop_event(&CropEvent::Done {
                name: "banner".into()
            }),
            vec!["[banner] Done."]
        );
        assert_eq!(
            format_crop_event(&CropEvent::Released {
                name: "banner".into()
            }),
            vec!["[banner] Released."]
        );
    }

    #[test]
    fn missing_source_failure_shows_path() {
        let err = CropError::SourceNotFound("/nonexistent.png".into());
        assert_eq!(
            format_failure(Path::new("/nonexistent.png"), &err),
            "[nonexistent.png] Failed: Unable to find image file at: /nonexistent.png"
        );
    }

    #[test]
    fn failure_line_uses_file_name_and_message() {
        let err = CropError::Validation(ValidationError::InvalidRight {
            value: 1005,
            min: 557,
            max: 1000,
        });
        assert_eq!(
            format_failure(Path::new("/p/narrow.png"), &err),
            "[narrow.png] Failed: Invalid right value: 1005 (Min: 557, Max: 1000)."
        );
    }

    fn report() -> CropReport {
        CropReport {
            source: "/p/banner.png".into(),
            output_dir: "/p/banner".into(),
            dimensions: Dimensions::new(1280, 480),
            config: ExportConfig::default(),
            slots: (1..=3)
                .zip(Region::ALL)
                .map(|(seq, region)| SlotExport {
                    region,
                    record: record(seq),
                })
                .collect(),
        }
    }

    #[test]
    fn summary_counts_files() {
        let outcome = BatchOutcome {
            reports: vec![report()],
            ..BatchOutcome::default()
        };
        assert_eq!(
            format_summary(&outcome),
            vec!["Processed 1 image, wrote 9 files"]
        );
    }

    #[test]
    fn summary_lists_failures_and_skips() {
        let outcome = BatchOutcome {
            reports: Vec::new(),
            failures: vec![
                BatchFailure {
                    source: "/p/a.png".into(),
                    error: CropError::NoFormatSelected,
                },
                BatchFailure {
                    source: "/p/b.png".into(),
                    error: CropError::SourceNotFound("/p/b.png".into()),
                },
            ],
            skipped: vec!["/p/c.png".into()],
        };
        assert_eq!(
            format_summary(&outcome),
            vec![
                "Processed 0 images, wrote 0 files",
                "2 images failed",
                "1 image skipped"
            ]
        );
    }

    #[test]
    fn json_report_lists_slots_and_config() {
        let json = format_json_report(&[report()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["source"], "/p/banner.png");
        assert_eq!(value[0]["dimensions"]["width"], 1280);
        assert_eq!(value[0]["config"]["jpeg"], true);
        assert_eq!(value[0]["slots"][2]["region"], "right");
        assert_eq!(value[0]["slots"][2]["sequence"], 3);
        assert_eq!(
            value[0]["slots"][2]["files"][2],
            "/p/banner/banner-3_ellipse.png"
        );
    }

    #[test]
    fn empty_json_report_is_empty_array() {
        assert_eq!(format_json_report(&[]).unwrap(), "[]");
    }
}
