//! Folder splitting command
//!
//! This module implements the command that splits every image of an input
//! folder into per-region PNG files.

use std::path::PathBuf;

use clap::ArgMatches;
use log::{error, info};

use crate::api::SpriteSplit;
use crate::commands::command_traits::Command;
use crate::errors::{SplitError, SplitResult};
use crate::extractor::{AlphaMode, ExtractionOptions};
use crate::labeling::Connectivity;

/// Command for splitting a folder of sprite images
#[derive(Debug)]
pub struct SplitCommand {
    /// Folder containing the source images
    input_folder: PathBuf,
    /// Root folder for the per-image output directories
    output_folder: PathBuf,
    /// Extraction settings
    options: ExtractionOptions,
    /// Only print the planned output
    dry_run: bool,
    /// Draw a progress bar while processing
    show_progress: bool,
}

impl SplitCommand {
    /// Create a new split command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new SplitCommand instance or an error
    pub fn new(args: &ArgMatches) -> SplitResult<Self> {
        let input_folder = args.get_one::<String>("input_folder")
            .ok_or_else(|| SplitError::InvalidArguments("Missing input folder".to_string()))?;

        let output_folder = args.get_one::<String>("output_folder")
            .ok_or_else(|| SplitError::InvalidArguments("Missing output folder".to_string()))?;

        let connectivity = match args.get_one::<String>("connectivity") {
            Some(value) => value.parse::<Connectivity>().map_err(SplitError::InvalidArguments)?,
            None => Connectivity::default(),
        };

        let alpha_mode = if args.get_flag("preserve-alpha") {
            AlphaMode::Preserve
        } else {
            AlphaMode::Binary
        };

        let options = ExtractionOptions::new(connectivity, alpha_mode);
        info!("Using {} labeling with {} alpha", connectivity, alpha_mode);

        Ok(SplitCommand {
            input_folder: PathBuf::from(input_folder),
            output_folder: PathBuf::from(output_folder),
            options,
            dry_run: args.get_flag("dry-run"),
            show_progress: !args.get_flag("no-progress"),
        })
    }

    fn describe(&self, splitter: &SpriteSplit) -> SplitResult<()> {
        let images = splitter.scan_folder(&self.input_folder)?;
        let mut failed = 0;

        for path in &images {
            match splitter.describe(path) {
                Ok(summary) => println!("{}", summary),
                Err(e) => {
                    error!("Failed to analyze {}: {}", path.display(), e);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(SplitError::PartialFailure { failed, total: images.len() });
        }
        Ok(())
    }
}

impl Command for SplitCommand {
    fn execute(&self) -> SplitResult<()> {
        let splitter = SpriteSplit::new(self.options).with_progress(self.show_progress);

        if self.dry_run {
            info!("Dry run: nothing will be written");
            return self.describe(&splitter);
        }

        info!("Splitting images from {} into {}",
              self.input_folder.display(), self.output_folder.display());

        let report = splitter.split_folder(&self.input_folder, &self.output_folder)?;

        for failure in &report.failed {
            eprintln!("Skipped {}: {}", failure.path.display(), failure.error);
        }
        println!("{} images split into {} regions, {} failed",
                 report.succeeded.len(), report.region_count(), report.failed.len());

        if !report.is_clean() {
            return Err(SplitError::PartialFailure {
                failed: report.failed.len(),
                total: report.total(),
            });
        }
        Ok(())
    }
}
