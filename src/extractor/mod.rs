//! Region extraction from sprite images
//!
//! This module finds the opaque regions of an image, picks the central one
//! and renders a cropped, masked PNG for every region.

mod crop;
mod naming;
mod options;
mod region;
mod region_extractor;
mod selection;
#[cfg(test)]
mod tests;

// Public exports
pub use crop::crop_region;
pub use naming::RegionFileName;
pub use options::{AlphaMode, ExtractionOptions};
pub use region::Region;
pub use region_extractor::{ExtractionPlan, ExtractionReport, RegionExtractor};
pub use selection::{select_center, CenterSelection};
