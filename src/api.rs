use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::errors::{SplitError, SplitResult};
use crate::extractor::{ExtractionOptions, ExtractionReport, RegionExtractor};
use crate::processor::{BatchReport, FolderProcessor};

/// Main interface to the spritesplit library
#[derive(Debug, Clone, Default)]
pub struct SpriteSplit {
    extractor: RegionExtractor,
    show_progress: bool,
}

impl SpriteSplit {
    /// Create a new instance with the given extraction options
    ///
    /// The progress bar is off by default.
    pub fn new(options: ExtractionOptions) -> Self {
        SpriteSplit {
            extractor: RegionExtractor::new(options),
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar for folder processing
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Split one image into `<output_root>/<file stem>/region_*.png`
    ///
    /// # Arguments
    /// * `input_path` - Image to split
    /// * `output_root` - Root folder for the per-image directory
    ///
    /// # Returns
    /// A report of the written files or an error
    pub fn split_image(&self, input_path: &Path, output_root: &Path) -> SplitResult<ExtractionReport> {
        self.extractor.extract_file(input_path, output_root)
    }

    /// Split every supported image of a folder
    ///
    /// Per-file failures are collected in the returned report; only an
    /// unreadable input folder or uncreatable output folder is an error.
    pub fn split_folder(&self, input_dir: &Path, output_root: &Path) -> SplitResult<BatchReport> {
        self.processor().process(input_dir, output_root)
    }

    /// Supported images directly inside a folder, sorted by name
    pub fn scan_folder(&self, input_dir: &Path) -> SplitResult<Vec<PathBuf>> {
        self.processor().scan(input_dir)
    }

    /// Describe the regions of an image without writing anything
    ///
    /// # Returns
    /// A multi-line summary listing every region and its output name
    pub fn describe(&self, input_path: &Path) -> SplitResult<String> {
        let image = self.extractor.load(input_path)?;
        let plan = self.extractor.plan(&image).map_err(|e| match e {
            SplitError::NoForegroundRegions { .. } => SplitError::NoForegroundRegions {
                path: Some(input_path.to_path_buf()),
            },
            other => other,
        })?;

        let mut result = String::new();
        let _ = writeln!(result, "{} ({}x{}):", input_path.display(), image.width(), image.height());
        let _ = writeln!(result, "  Image center: ({}, {})", plan.image_center.x, plan.image_center.y);
        let _ = writeln!(result, "  Regions: {}", plan.regions.len());

        for (region, name) in plan.regions.iter().zip(plan.file_names()) {
            let _ = writeln!(
                result,
                "  #{:<4} bbox ({}, {})-({}, {}) {}x{} -> {}",
                region.label,
                region.bbox.min_x,
                region.bbox.min_y,
                region.bbox.max_x,
                region.bbox.max_y,
                region.bbox.width(),
                region.bbox.height(),
                name
            );
        }

        Ok(result.trim_end().to_string())
    }

    fn processor(&self) -> FolderProcessor {
        FolderProcessor::new(self.extractor.clone(), self.show_progress)
    }
}
