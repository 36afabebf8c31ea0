//! Point and offset structures for pixel coordinates

use std::fmt;

/// A point in pixel space
///
/// Coordinates are signed so that differences between points can be
/// represented without a separate type conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    /// X coordinate (pixels from left)
    pub x: i64,
    /// Y coordinate (pixels from top)
    pub y: i64,
}

impl PixelPoint {
    /// Create a new point
    pub fn new(x: i64, y: i64) -> Self {
        PixelPoint { x, y }
    }

    /// Geometric center of an image, using integer division
    pub fn image_center(width: u32, height: u32) -> Self {
        PixelPoint::new((width / 2) as i64, (height / 2) as i64)
    }

    /// Squared Euclidean distance to another point
    pub fn distance_squared(&self, other: &PixelPoint) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Offset of this point relative to `origin`
    pub fn offset_from(&self, origin: &PixelPoint) -> Offset {
        Offset::new(self.x - origin.x, self.y - origin.y)
    }

    /// Translate this point by an offset
    pub fn translate(&self, offset: Offset) -> PixelPoint {
        PixelPoint::new(self.x + offset.dx, self.y + offset.dy)
    }
}

/// Displacement between two pixel points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub dx: i64,
    pub dy: i64,
}

impl Offset {
    pub fn new(dx: i64, dy: i64) -> Self {
        Offset { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_center_uses_floor_division() {
        assert_eq!(PixelPoint::image_center(100, 100), PixelPoint::new(50, 50));
        assert_eq!(PixelPoint::image_center(7, 3), PixelPoint::new(3, 1));
    }

    #[test]
    fn test_offset_and_translate() {
        let origin = PixelPoint::new(50, 50);
        let p = PixelPoint::new(2, 60);
        let offset = p.offset_from(&origin);

        assert_eq!(offset, Offset::new(-48, 10));
        assert_eq!(offset.to_string(), "-48x10");
        assert_eq!(origin.translate(offset), p);
        assert_eq!(p.distance_squared(&origin), 48 * 48 + 10 * 10);
    }
}
