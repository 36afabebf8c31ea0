//! Bounding box structure for pixel regions

use super::point::PixelPoint;

/// Axis-aligned pixel bounding box with inclusive bounds
///
/// Both `min_*` and `max_*` name pixels that belong to the box, so a box
/// covering a single pixel has `min_x == max_x` and a width of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    /// Leftmost column
    pub min_x: u32,
    /// Topmost row
    pub min_y: u32,
    /// Rightmost column (inclusive)
    pub max_x: u32,
    /// Bottom row (inclusive)
    pub max_y: u32,
}

impl PixelBox {
    /// Create a new bounding box from inclusive bounds
    pub fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        PixelBox { min_x, min_y, max_x, max_y }
    }

    /// Box covering exactly one pixel
    pub fn from_pixel(x: u32, y: u32) -> Self {
        PixelBox::new(x, y, x, y)
    }

    /// Grow the box so that it contains the pixel at (x, y)
    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Number of pixels covered by the box
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Integer midpoint of the box: `((min + max) / 2)` on each axis
    ///
    /// This is the position used for every distance comparison between
    /// regions; it is not a centroid of mass.
    pub fn midpoint(&self) -> PixelPoint {
        PixelPoint::new(
            ((self.min_x as i64) + (self.max_x as i64)) / 2,
            ((self.min_y as i64) + (self.max_y as i64)) / 2,
        )
    }
}
