//! Folder processor
//!
//! Runs the region extractor over every supported image of a directory.
//! A failing image is logged and recorded, and the remaining images are
//! still processed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::errors::{SplitError, SplitResult};
use crate::extractor::{ExtractionReport, RegionExtractor};
use crate::utils::progress::ProgressTracker;
use super::file_filter::is_supported_image;

/// A file that could not be processed
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: SplitError,
}

/// Outcome of processing a folder
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Images that were split successfully
    pub succeeded: Vec<ExtractionReport>,
    /// Images that failed, with their errors
    pub failed: Vec<FileFailure>,
}

impl BatchReport {
    /// Number of images attempted
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// True when no image failed
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of region files written across all images
    pub fn region_count(&self) -> usize {
        self.succeeded.iter().map(|r| r.files.len()).sum()
    }
}

/// Applies a [`RegionExtractor`] to each image in a folder
#[derive(Debug, Clone)]
pub struct FolderProcessor {
    extractor: RegionExtractor,
    show_progress: bool,
}

impl FolderProcessor {
    /// Create a new processor
    ///
    /// # Arguments
    /// * `extractor` - Extractor applied to every image
    /// * `show_progress` - Whether to draw a progress bar
    pub fn new(extractor: RegionExtractor, show_progress: bool) -> Self {
        FolderProcessor { extractor, show_progress }
    }

    /// List the supported image files directly inside `input_dir`
    ///
    /// Subdirectories and other files are skipped. The result is sorted by
    /// file name. A missing or unreadable folder is an `InputFolderError`.
    pub fn scan(&self, input_dir: &Path) -> SplitResult<Vec<PathBuf>> {
        let folder_error = |e: io::Error| SplitError::InputFolderError {
            path: input_dir.to_path_buf(),
            source: e,
        };

        let mut images = Vec::new();
        for entry in fs::read_dir(input_dir).map_err(folder_error)? {
            let path = entry.map_err(folder_error)?.path();
            if path.is_file() && is_supported_image(&path) {
                images.push(path);
            }
        }

        images.sort();
        Ok(images)
    }

    /// Split every supported image of `input_dir` into `output_dir`
    ///
    /// # Returns
    /// A report of successes and per-file failures, or an error if the
    /// input folder cannot be read or the output folder cannot be created
    pub fn process(&self, input_dir: &Path, output_dir: &Path) -> SplitResult<BatchReport> {
        let images = self.scan(input_dir)?;

        fs::create_dir_all(output_dir).map_err(|e| SplitError::OutputPathError {
            path: output_dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        if images.is_empty() {
            warn!("No supported images found in {}", input_dir.display());
        } else {
            info!("Found {} images in {}", images.len(), input_dir.display());
        }

        let progress = if self.show_progress {
            ProgressTracker::new(images.len() as u64, "Splitting images")
        } else {
            ProgressTracker::hidden()
        };

        let mut report = BatchReport::default();
        for path in images {
            progress.set_message(&display_name(&path));

            match self.extractor.extract_file(&path, output_dir) {
                Ok(extraction) => report.succeeded.push(extraction),
                Err(e) => {
                    error!("Failed to process {}: {}", path.display(), e);
                    report.failed.push(FileFailure { path, error: e });
                }
            }

            progress.increment(1);
        }
        progress.finish();

        info!(
            "Processed {} images: {} succeeded, {} failed, {} regions written",
            report.total(),
            report.succeeded.len(),
            report.failed.len(),
            report.region_count()
        );

        Ok(report)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
