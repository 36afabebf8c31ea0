pub mod errors;
pub mod geometry;
pub mod labeling;
pub mod extractor;
pub mod processor;
pub mod utils;
pub mod commands;
pub mod cli;
pub mod api;

pub use crate::api::SpriteSplit;

pub use errors::{SplitError, SplitResult};
pub use extractor::{AlphaMode, ExtractionOptions, ExtractionReport, Region, RegionExtractor, RegionFileName};
pub use labeling::Connectivity;
pub use processor::{BatchReport, FolderProcessor};
