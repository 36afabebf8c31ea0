//! Connected-component label map

use image::{ImageBuffer, Luma};
use imageproc::region_labelling::connected_components;

use crate::geometry::PixelBox;
use super::alpha_mask::AlphaMask;
use super::connectivity::Connectivity;

/// Per-pixel component labels
///
/// Label 0 is background; components are numbered from 1 in the raster
/// order (top to bottom, left to right) of their first pixel.
#[derive(Debug, Clone)]
pub struct LabelMap {
    labels: ImageBuffer<Luma<u32>, Vec<u32>>,
    count: u32,
}

impl LabelMap {
    /// Label the connected components of a mask
    pub fn label(mask: &AlphaMask, connectivity: Connectivity) -> Self {
        let labels = connected_components(&mask.to_luma(), connectivity.into(), Luma([0u8]));
        let count = labels.pixels().map(|p| p[0]).max().unwrap_or(0);

        LabelMap { labels, count }
    }

    pub fn width(&self) -> u32 {
        self.labels.width()
    }

    pub fn height(&self) -> u32 {
        self.labels.height()
    }

    /// Number of components found
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Label at (x, y), 0 for background or out-of-range coordinates
    pub fn label_at(&self, x: u32, y: u32) -> u32 {
        self.labels.get_pixel_checked(x, y).map(|p| p[0]).unwrap_or(0)
    }

    /// Bounding box of every label, indexed by `label - 1`
    ///
    /// An entry is `None` only for a label with no member pixels.
    pub fn bounding_boxes(&self) -> Vec<Option<PixelBox>> {
        let mut boxes: Vec<Option<PixelBox>> = vec![None; self.count as usize];

        for (x, y, pixel) in self.labels.enumerate_pixels() {
            let label = pixel[0];
            if label == 0 {
                continue;
            }
            match &mut boxes[(label - 1) as usize] {
                Some(b) => b.include(x, y),
                slot => *slot = Some(PixelBox::from_pixel(x, y)),
            }
        }

        boxes
    }
}
