//! Tests for cropping and alpha replacement

use image::{Rgba, RgbaImage};

use crate::extractor::{crop_region, AlphaMode, Region};
use crate::labeling::{AlphaMask, Connectivity, LabelMap};

/// 4x4 image: an L-shaped region with alpha 128 and a separate pixel
/// inside its bounding box at (1, 0)
fn sample_image() -> RgbaImage {
    let mut img = RgbaImage::new(4, 4);
    for (x, y) in [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)] {
        img.put_pixel(x, y, Rgba([10, 20, 30, 128]));
    }
    img.put_pixel(2, 0, Rgba([90, 90, 90, 255]));
    img
}

#[test]
fn test_binary_alpha_covers_own_pixels_only() {
    let img = sample_image();
    let labels = LabelMap::label(&AlphaMask::from_rgba(&img), Connectivity::Four);
    let regions = Region::collect(&labels);
    assert_eq!(regions.len(), 2);

    let l_shape = regions.iter().find(|r| r.bbox.width() == 3).unwrap();
    let crop = crop_region(&img, &labels, l_shape, AlphaMode::Binary);

    assert_eq!(crop.dimensions(), (3, 3));
    assert_eq!(crop.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    assert_eq!(crop.get_pixel(2, 2), &Rgba([10, 20, 30, 255]));
    // The other region's pixel keeps its colour but becomes transparent
    assert_eq!(crop.get_pixel(2, 0), &Rgba([90, 90, 90, 0]));
    assert_eq!(crop.get_pixel(1, 1)[3], 0);
}

#[test]
fn test_preserve_alpha_keeps_source_values() {
    let img = sample_image();
    let labels = LabelMap::label(&AlphaMask::from_rgba(&img), Connectivity::Four);
    let regions = Region::collect(&labels);
    let l_shape = regions.iter().find(|r| r.bbox.width() == 3).unwrap();

    let crop = crop_region(&img, &labels, l_shape, AlphaMode::Preserve);
    assert_eq!(crop.get_pixel(0, 1)[3], 128);
    assert_eq!(crop.get_pixel(2, 0)[3], 0);
}
