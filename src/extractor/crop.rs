//! Cropping a region out of its source image

use image::{Rgba, RgbaImage};

use crate::labeling::LabelMap;
use super::options::AlphaMode;
use super::region::Region;

/// Crop `region` out of `image` and mask it with the region's own label
///
/// Colour channels are copied from the source for the whole bounding box.
/// The alpha channel is rebuilt from the label map: pixels of other
/// regions and background become fully transparent, and the region's own
/// pixels get 255 (`Binary`) or their source alpha (`Preserve`).
pub fn crop_region(
    image: &RgbaImage,
    labels: &LabelMap,
    region: &Region,
    alpha_mode: AlphaMode,
) -> RgbaImage {
    let bbox = region.bbox;

    RgbaImage::from_fn(bbox.width(), bbox.height(), |x, y| {
        let sx = bbox.min_x + x;
        let sy = bbox.min_y + y;
        let source = image.get_pixel(sx, sy);

        let alpha = if labels.label_at(sx, sy) == region.label {
            match alpha_mode {
                AlphaMode::Binary => 255,
                AlphaMode::Preserve => source[3],
            }
        } else {
            0
        };

        Rgba([source[0], source[1], source[2], alpha])
    })
}
