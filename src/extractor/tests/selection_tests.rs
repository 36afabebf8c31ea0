//! Tests for central region selection

use crate::extractor::{select_center, Region};
use crate::geometry::{PixelBox, PixelPoint};

#[test]
fn test_nearest_region_is_central() {
    let regions = vec![
        Region::new(1, PixelBox::new(0, 0, 5, 5)),
        Region::new(2, PixelBox::new(45, 45, 55, 55)),
    ];

    let selection = select_center(&regions, PixelPoint::new(50, 50)).unwrap();
    assert_eq!(selection.central, 1);
    assert_eq!(selection.smallest, 1);
    assert_eq!(selection.origin(&regions), PixelPoint::new(50, 50));
}

#[test]
fn test_distance_ties_keep_first_label() {
    // Both midpoints are 10 pixels from (50, 50)
    let regions = vec![
        Region::new(1, PixelBox::new(38, 48, 42, 52)),
        Region::new(2, PixelBox::new(58, 48, 62, 52)),
    ];

    let selection = select_center(&regions, PixelPoint::new(50, 50)).unwrap();
    assert_eq!(selection.central, 0);
}

#[test]
fn test_smallest_region_sharing_midpoint_wins() {
    // A frame around a dot: all three share midpoint (10, 10)
    let regions = vec![
        Region::new(1, PixelBox::new(0, 0, 20, 20)),
        Region::new(2, PixelBox::new(30, 30, 32, 32)),
        Region::new(3, PixelBox::new(9, 9, 11, 11)),
        Region::new(4, PixelBox::new(5, 5, 15, 15)),
    ];

    let selection = select_center(&regions, PixelPoint::new(10, 10)).unwrap();
    assert_eq!(selection.central, 0);
    assert_eq!(selection.smallest, 2);
}

#[test]
fn test_equal_area_ties_keep_first_label() {
    let regions = vec![
        Region::new(1, PixelBox::new(40, 40, 60, 60)),
        Region::new(2, PixelBox::new(49, 49, 51, 51)),
        Region::new(3, PixelBox::new(49, 49, 51, 51)),
    ];

    let selection = select_center(&regions, PixelPoint::new(50, 50)).unwrap();
    assert_eq!(selection.smallest, 1);
}

#[test]
fn test_no_regions_selects_nothing() {
    assert!(select_center(&[], PixelPoint::new(0, 0)).is_none());
}
