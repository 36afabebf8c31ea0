//! Integer pixel geometry
//!
//! This module provides the small set of pixel-space types used to describe
//! regions: points, offsets between points and inclusive bounding boxes.

mod bbox;
mod point;

// Re-export key types
pub use self::bbox::PixelBox;
pub use self::point::{Offset, PixelPoint};
