//! Batch orchestration: pre-flight gate, per-directory conversion, failure
//! isolation.
//!
//! A run has two phases. Pre-flight validates **every** input directory
//! before any conversion starts; one bad path aborts the whole batch with
//! zero files written. The conversion phase then processes directories one
//! at a time, strictly sequentially, and a failure inside one directory
//! abandons only that directory's document — the run always continues with
//! the next directory. Resizing and encoding are slow; losing the whole
//! batch to one corrupt scan is not acceptable.
//!
//! An abandoned directory's partially written output file is left on disk
//! as-is, matching the per-directory isolation contract: the failure is
//! reported, never silently cleaned up.
//!
//! Progress is reported through an optional [`BatchEvent`] channel; the
//! orchestrator itself never prints.

use crate::assemble::{AssembleError, DocumentWriter};
use crate::config::ScaleConfig;
use crate::imaging::{ResampleError, resample};
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Batch-fatal error: raised before any conversion starts.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("pre-flight validation failed: {0}")]
    Preflight(#[from] ScanError),
}

/// Directory-fatal error: abandons one directory's document.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Resample(#[from] ResampleError),
    #[error(transparent)]
    Write(#[from] AssembleError),
}

/// Progress notifications emitted during a run.
#[derive(Debug)]
pub enum BatchEvent {
    DirectoryStarted {
        path: PathBuf,
        total: usize,
    },
    /// One page resampled and appended; `index` is 1-based.
    PageAdded {
        path: PathBuf,
        index: usize,
        total: usize,
    },
    DirectoryCompleted {
        path: PathBuf,
        output: PathBuf,
        pages: usize,
    },
    DirectoryFailed {
        path: PathBuf,
        error: String,
    },
}

/// Terminal state of one input directory.
#[derive(Debug)]
pub struct DirectoryOutcome {
    pub source: PathBuf,
    pub result: Result<PathBuf, DirectoryError>,
}

/// Per-directory outcomes of a finished run, in input order.
#[derive(Debug)]
pub struct BatchSummary {
    pub directories: Vec<DirectoryOutcome>,
}

impl BatchSummary {
    pub fn completed(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.result.is_ok())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.directories.len() - self.completed()
    }

    pub fn all_completed(&self) -> bool {
        self.failed() == 0
    }
}

/// Output document path for a source directory: the directory's own
/// name/extension replaced with `.pdf`, in the same parent location.
///
/// A leading-dot name like `.archive` has no extension, so it becomes
/// `.archive.pdf` rather than a hidden bare `.pdf`.
pub fn output_path(dir: &Path) -> PathBuf {
    dir.with_extension("pdf")
}

/// Run the full batch: pre-flight every directory, then convert each one.
///
/// Returns `Err` only for batch-fatal pre-flight failures; per-directory
/// failures are recorded in the summary and reported through `events`.
pub fn run(
    dirs: &[PathBuf],
    scale: &ScaleConfig,
    events: Option<&Sender<BatchEvent>>,
) -> Result<BatchSummary, BatchError> {
    // All-or-nothing gate: every directory must pass before any is touched.
    for dir in dirs {
        scan::validate_directory(dir)?;
    }

    let mut directories = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let result = match convert_directory(dir, scale, events) {
            Ok((output, pages)) => {
                emit(
                    events,
                    BatchEvent::DirectoryCompleted {
                        path: dir.clone(),
                        output: output.clone(),
                        pages,
                    },
                );
                Ok(output)
            }
            Err(err) => {
                emit(
                    events,
                    BatchEvent::DirectoryFailed {
                        path: dir.clone(),
                        error: err.to_string(),
                    },
                );
                Err(err)
            }
        };
        directories.push(DirectoryOutcome {
            source: dir.clone(),
            result,
        });
    }

    Ok(BatchSummary { directories })
}

/// Convert one directory into one document.
///
/// Any error abandons the document mid-write; whatever the writer already
/// put on disk stays there.
fn convert_directory(
    dir: &Path,
    scale: &ScaleConfig,
    events: Option<&Sender<BatchEvent>>,
) -> Result<(PathBuf, usize), DirectoryError> {
    let images = scan::list_images(dir)?;
    let total = images.len();
    emit(
        events,
        BatchEvent::DirectoryStarted {
            path: dir.to_path_buf(),
            total,
        },
    );

    let mut writer = DocumentWriter::create(&output_path(dir))?;
    for (index, image) in images.iter().enumerate() {
        let page = resample(image, scale)?;
        writer.add_page(page.jpeg, &page.spec);
        emit(
            events,
            BatchEvent::PageAdded {
                path: dir.to_path_buf(),
                index: index + 1,
                total,
            },
        );
    }
    let pages = writer.page_count();
    Ok((writer.finalize()?, pages))
}

fn emit(events: Option<&Sender<BatchEvent>>, event: BatchEvent) {
    if let Some(tx) = events {
        // A dropped receiver just means nobody is listening
        let _ = tx.send(event);
    }
}
