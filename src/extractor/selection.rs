//! Central region selection
//!
//! The central region is the one whose bbox midpoint is nearest the image
//! center. Several regions can share that midpoint (a ring around a dot,
//! for example), in which case the one with the smallest bbox area is the
//! one that gets tagged as the center.

use crate::geometry::PixelPoint;
use super::region::Region;

/// Indexes of the chosen regions within the region list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterSelection {
    /// Region nearest to the image center
    pub central: usize,
    /// Smallest-area region sharing the central region's midpoint
    pub smallest: usize,
}

impl CenterSelection {
    /// Midpoint all offsets are measured from
    pub fn origin(&self, regions: &[Region]) -> PixelPoint {
        regions[self.central].midpoint
    }
}

/// Pick the central and smallest-central regions
///
/// Both choices keep the first region in label order on ties. Returns
/// `None` for an empty region list.
pub fn select_center(regions: &[Region], image_center: PixelPoint) -> Option<CenterSelection> {
    // min_by_key returns the first of several equal minima
    let (central, central_region) = regions
        .iter()
        .enumerate()
        .min_by_key(|(_, r)| r.midpoint.distance_squared(&image_center))?;

    let (smallest, _) = regions
        .iter()
        .enumerate()
        .filter(|(_, r)| r.midpoint == central_region.midpoint)
        .min_by_key(|(_, r)| r.area())?;

    Some(CenterSelection { central, smallest })
}
