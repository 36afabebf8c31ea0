//! Tests for in-memory extraction plans

use image::{Rgba, RgbaImage};

use crate::errors::SplitError;
use crate::extractor::{ExtractionOptions, RegionExtractor};
use crate::geometry::{Offset, PixelPoint};

fn fill(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
}

#[test]
fn test_two_squares_plan() {
    let mut img = RgbaImage::new(100, 100);
    fill(&mut img, 0, 0, 5, 5);
    fill(&mut img, 45, 45, 55, 55);

    let extractor = RegionExtractor::default();
    let plan = extractor.plan(&img).unwrap();

    assert_eq!(plan.regions.len(), 2);
    assert_eq!(plan.image_center, PixelPoint::new(50, 50));
    assert_eq!(plan.central_region().label, 2);
    assert_eq!(plan.center_region().label, 2);

    let names: Vec<String> = plan.file_names().iter().map(|n| n.to_string()).collect();
    assert_eq!(names, vec!["region_1_-48x-48.png", "region_2_0x0_center.png"]);
}

#[test]
fn test_offsets_reproduce_midpoints() {
    let mut img = RgbaImage::new(64, 32);
    fill(&mut img, 1, 1, 4, 3);
    fill(&mut img, 30, 14, 33, 17);
    fill(&mut img, 50, 20, 60, 30);

    let plan = RegionExtractor::default().plan(&img).unwrap();
    let origin = plan.central_region().midpoint;

    for (region, name) in plan.regions.iter().zip(plan.file_names()) {
        assert_eq!(name.label, region.label);
        assert_eq!(origin.translate(name.offset), region.midpoint);
    }
    assert_eq!(plan.file_names().iter().filter(|n| n.is_center).count(), 1);
}

#[test]
fn test_only_smallest_shared_midpoint_is_center() {
    // A hollow frame with a dot in the middle: both midpoints are (10, 10)
    let mut img = RgbaImage::new(21, 21);
    fill(&mut img, 0, 0, 20, 0);
    fill(&mut img, 0, 20, 20, 20);
    fill(&mut img, 0, 0, 0, 20);
    fill(&mut img, 20, 0, 20, 20);
    fill(&mut img, 9, 9, 11, 11);

    let plan = RegionExtractor::default().plan(&img).unwrap();
    let names = plan.file_names();

    assert_eq!(names.len(), 2);
    assert_eq!(names[0], crate::extractor::RegionFileName::new(1, Offset::new(0, 0), false));
    assert_eq!(names[1], crate::extractor::RegionFileName::new(2, Offset::new(0, 0), true));
}

#[test]
fn test_render_produces_one_crop_per_region() {
    let mut img = RgbaImage::new(20, 10);
    fill(&mut img, 0, 0, 2, 2);
    fill(&mut img, 10, 4, 14, 6);

    let extractor = RegionExtractor::new(ExtractionOptions::default());
    let plan = extractor.plan(&img).unwrap();
    let crops = extractor.render(&img, &plan);

    assert_eq!(crops.len(), 2);
    assert_eq!(crops[0].1.dimensions(), (3, 3));
    assert_eq!(crops[1].1.dimensions(), (5, 3));
}

#[test]
fn test_transparent_image_has_no_regions() {
    let img = RgbaImage::new(16, 16);
    match RegionExtractor::default().plan(&img) {
        Err(SplitError::NoForegroundRegions { path: None }) => {}
        other => panic!("expected NoForegroundRegions, got {:?}", other.map(|p| p.regions)),
    }
}

#[test]
fn test_zero_sized_image_has_no_regions() {
    let img = RgbaImage::new(0, 0);
    let result = RegionExtractor::default().plan(&img);
    assert!(matches!(result, Err(SplitError::NoForegroundRegions { path: None })));
}
