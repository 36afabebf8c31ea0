//! Binary foreground mask derived from an alpha channel

use image::{GrayImage, Luma, RgbaImage};

/// Boolean grid that is `true` wherever the source alpha is non-zero
#[derive(Debug, Clone)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    foreground: Vec<bool>,
}

impl AlphaMask {
    /// Build the mask from an RGBA image
    ///
    /// A pixel is foreground iff its alpha is greater than zero.
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let foreground = image.pixels().map(|p| p[3] > 0).collect();
        AlphaMask {
            width: image.width(),
            height: image.height(),
            foreground,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether the pixel at (x, y) is foreground
    ///
    /// Out-of-range coordinates are treated as background.
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.foreground[(y as usize) * (self.width as usize) + x as usize]
    }

    /// True when no pixel is foreground
    pub fn is_empty(&self) -> bool {
        !self.foreground.iter().any(|&f| f)
    }

    /// Mask as a grayscale image: 255 for foreground, 0 for background
    pub fn to_luma(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([if self.is_foreground(x, y) { 255 } else { 0 }])
        })
    }
}
