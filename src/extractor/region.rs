//! Region structure describing one connected opaque area

use crate::geometry::{PixelBox, PixelPoint};
use crate::labeling::LabelMap;

/// A labeled connected component of the alpha mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Component label (starting at 1)
    pub label: u32,
    /// Inclusive bounding box of the member pixels
    pub bbox: PixelBox,
    /// Integer midpoint of `bbox`
    pub midpoint: PixelPoint,
}

impl Region {
    /// Create a region from its label and bounding box
    pub fn new(label: u32, bbox: PixelBox) -> Self {
        Region {
            label,
            bbox,
            midpoint: bbox.midpoint(),
        }
    }

    /// Collect all regions of a label map in label order
    ///
    /// Labels without member pixels are skipped.
    pub fn collect(labels: &LabelMap) -> Vec<Region> {
        labels
            .bounding_boxes()
            .into_iter()
            .enumerate()
            .filter_map(|(idx, bbox)| bbox.map(|b| Region::new(idx as u32 + 1, b)))
            .collect()
    }

    /// Bounding box area in pixels
    pub fn area(&self) -> u64 {
        self.bbox.area()
    }
}
