//! Running the slot pipeline over a list of source files.
//!
//! Sources are processed strictly in order, one [`Cropper`](crate::crop::Cropper)
//! at a time. What happens after a failing file depends on [`FailurePolicy`]:
//!
//! | Policy | After a failure |
//! |--------|-----------------|
//! | [`FailurePolicy::Abort`] | Remaining files are skipped |
//! | [`FailurePolicy::KeepGoing`] | Next file is processed |
//!
//! Either way every failure is reported through the event callback as it
//! happens, and [`BatchOutcome::succeeded`] is false afterwards.

use crate::config::ExportConfig;
use crate::crop::{CropError, CropEvent, CropReport, crop_file_with_backend};
use crate::imaging::ImageBackend;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing file.
    #[default]
    Abort,
    /// Report the failure and move on to the next file.
    KeepGoing,
}

/// Something the caller may want to show while a batch runs.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Progress(&'a CropEvent),
    Failed {
        source: &'a Path,
        error: &'a CropError,
    },
}

#[derive(Debug)]
pub struct BatchFailure {
    pub source: PathBuf,
    pub error: CropError,
}

/// Everything a batch produced.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<CropReport>,
    pub failures: Vec<BatchFailure>,
    /// Files never attempted because an earlier one aborted the batch.
    pub skipped: Vec<PathBuf>,
}

impl BatchOutcome {
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }
}

/// Process `files` in order with `backend`.
///
/// Progress events of each file are delivered once that file is finished,
/// followed by its failure if it had one.
pub fn run_batch(
    backend: &impl ImageBackend,
    files: &[PathBuf],
    config: &ExportConfig,
    policy: FailurePolicy,
    mut on_event: impl FnMut(BatchEvent<'_>),
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (i, path) in files.iter().enumerate() {
        let (tx, rx) = mpsc::channel();
        let result = crop_file_with_backend(backend, path, config, Some(tx));
        for event in rx.try_iter() {
            on_event(BatchEvent::Progress(&event));
        }

        match result {
            Ok(report) => outcome.reports.push(report),
            Err(error) => {
                on_event(BatchEvent::Failed {
                    source: path,
                    error: &error,
                });
                outcome.failures.push(BatchFailure {
                    source: path.clone(),
                    error,
                });
                if policy == FailurePolicy::Abort {
                    outcome.skipped.extend_from_slice(&files[i + 1..]);
                    break;
                }
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;
    use crate::output::{format_crop_event, format_failure};
    use crate::test_helpers::banner_image;
    use tempfile::TempDir;

    /// `names` as paths in `tmp`; only those not starting with "missing" exist.
    fn sources(tmp: &TempDir, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|name| {
                let path = tmp.path().join(name);
                if !name.starts_with("missing") {
                    std::fs::write(&path, b"").unwrap();
                }
                path
            })
            .collect()
    }

    /// Run a batch and render every event the way the CLI would.
    fn run_collecting(
        backend: &MockBackend,
        files: &[PathBuf],
        policy: FailurePolicy,
    ) -> (BatchOutcome, Vec<String>, Vec<String>) {
        let mut progress = Vec::new();
        let mut errors = Vec::new();
        let outcome = run_batch(
            backend,
            files,
            &ExportConfig::default(),
            policy,
            |event| match event {
                BatchEvent::Progress(e) => progress.extend(format_crop_event(e)),
                BatchEvent::Failed { source, error } => {
                    errors.push(format_failure(source, error))
                }
            },
        );
        (outcome, progress, errors)
    }

    #[test]
    fn all_files_succeed() {
        let tmp = TempDir::new().unwrap();
        let files = sources(&tmp, &["a.png", "b.png"]);
        let backend = MockBackend::with_image(banner_image(1280, 480));

        let (outcome, progress, errors) = run_collecting(&backend, &files, FailurePolicy::Abort);

        assert!(outcome.succeeded());
        assert_eq!(outcome.reports.len(), 2);
        assert_eq!(backend.encoded_names().len(), 18);
        assert!(errors.is_empty());
        assert_eq!(progress.first().unwrap(), "[a] Loaded: [W: 1280, H: 480]");
        assert_eq!(progress.last().unwrap(), "[b] Released.");
    }

    #[test]
    fn abort_stops_at_first_failure() {
        let tmp = TempDir::new().unwrap();
        let files = sources(&tmp, &["a.png", "missing.png", "c.png"]);
        let backend = MockBackend::with_image(banner_image(1280, 480));

        let (outcome, _, errors) = run_collecting(&backend, &files, FailurePolicy::Abort);

        assert!(!outcome.succeeded());
        assert_eq!(outcome.reports.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].source, files[1]);
        assert_eq!(outcome.skipped, vec![files[2].clone()]);
        // c.png was never decoded.
        assert_eq!(backend.encoded_names().len(), 9);
        assert_eq!(
            errors,
            vec![format!(
                "[missing.png] Failed: Unable to find image file at: {}",
                files[1].display()
            )]
        );
    }

    #[test]
    fn keep_going_processes_every_file() {
        let tmp = TempDir::new().unwrap();
        let files = sources(&tmp, &["missing-1.png", "b.png", "missing-2.png", "d.png"]);
        let backend = MockBackend::with_image(banner_image(1280, 480));

        let (outcome, _, errors) = run_collecting(&backend, &files, FailurePolicy::KeepGoing);

        assert!(!outcome.succeeded());
        assert_eq!(outcome.reports.len(), 2);
        assert_eq!(outcome.failures.len(), 2);
        assert!(outcome.skipped.is_empty());
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("[missing-1.png] Failed: Unable to find image file at: "));
        assert!(errors[1].starts_with("[missing-2.png] Failed: "));
    }

    #[test]
    fn validation_failure_reports_exact_message_after_progress() {
        let tmp = TempDir::new().unwrap();
        let files = sources(&tmp, &["narrow.png", "next.png"]);
        let backend = MockBackend::with_image(banner_image(1000, 480));

        let (outcome, progress, errors) = run_collecting(&backend, &files, FailurePolicy::Abort);

        assert_eq!(
            errors,
            vec!["[narrow.png] Failed: Invalid right value: 1005 (Min: 557, Max: 1000)."]
        );
        assert!(progress.contains(&"[narrow] Exported #1 (left)".to_string()));
        assert_eq!(progress.last().unwrap(), "[narrow] Released.");
        assert_eq!(outcome.skipped, vec![files[1].clone()]);
    }

    #[test]
    fn empty_batch_succeeds() {
        let backend = MockBackend::new();
        let (outcome, progress, errors) = run_collecting(&backend, &[], FailurePolicy::Abort);
        assert!(outcome.succeeded());
        assert!(outcome.reports.is_empty());
        assert!(progress.is_empty() && errors.is_empty());
    }
}
