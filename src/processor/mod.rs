//! Batch processing of image folders
//!
//! This module enumerates the supported images of an input directory and
//! runs the region extractor on each of them.

mod file_filter;
mod folder_processor;

pub use file_filter::{is_supported_image, SUPPORTED_EXTENSIONS};
pub use folder_processor::{BatchReport, FileFailure, FolderProcessor};
