//! Tests for output file names

use crate::extractor::RegionFileName;
use crate::geometry::Offset;

#[test]
fn test_format_names() {
    assert_eq!(
        RegionFileName::new(2, Offset::new(0, 0), true).to_string(),
        "region_2_0x0_center.png"
    );
    assert_eq!(
        RegionFileName::new(1, Offset::new(-48, -48), false).to_string(),
        "region_1_-48x-48.png"
    );
    assert_eq!(
        RegionFileName::new(5, Offset::new(0, 0), false).to_string(),
        "region_5_0x0.png"
    );
}

#[test]
fn test_parse_names() {
    let parsed = RegionFileName::parse("region_12_-3x7_center.png").unwrap();
    assert_eq!(parsed.label, 12);
    assert_eq!(parsed.offset, Offset::new(-3, 7));
    assert!(parsed.is_center);

    let parsed = RegionFileName::parse("region_4_10x-2.png").unwrap();
    assert_eq!(parsed, RegionFileName::new(4, Offset::new(10, -2), false));
}

#[test]
fn test_parse_rejects_foreign_names() {
    assert!(RegionFileName::parse("sprite.png").is_none());
    assert!(RegionFileName::parse("region_1_3x4.jpg").is_none());
    assert!(RegionFileName::parse("region_a_3x4.png").is_none());
    assert!(RegionFileName::parse("region_1_34.png").is_none());
}
