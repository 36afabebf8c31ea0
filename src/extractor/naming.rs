//! Output file naming
//!
//! Files are named `region_<label>_<dx>x<dy>[_center].png`, where
//! `(dx, dy)` is the region's midpoint relative to the central region.

use std::fmt;

use crate::geometry::Offset;

const PREFIX: &str = "region_";
const CENTER_SUFFIX: &str = "_center";
const EXTENSION: &str = ".png";

/// Structured form of an output file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionFileName {
    pub label: u32,
    pub offset: Offset,
    pub is_center: bool,
}

impl RegionFileName {
    pub fn new(label: u32, offset: Offset, is_center: bool) -> Self {
        RegionFileName { label, offset, is_center }
    }

    /// Parse a file name produced by this module
    ///
    /// Returns `None` for anything that does not follow the naming scheme.
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_prefix(PREFIX)?.strip_suffix(EXTENSION)?;
        let (stem, is_center) = match stem.strip_suffix(CENTER_SUFFIX) {
            Some(s) => (s, true),
            None => (stem, false),
        };

        let (label, coords) = stem.split_once('_')?;
        let (dx, dy) = coords.split_once('x')?;

        Some(RegionFileName {
            label: label.parse().ok()?,
            offset: Offset::new(dx.parse().ok()?, dy.parse().ok()?),
            is_center,
        })
    }
}

impl fmt::Display for RegionFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}_{}", PREFIX, self.label, self.offset)?;
        if self.is_center {
            write!(f, "{}", CENTER_SUFFIX)?;
        }
        write!(f, "{}", EXTENSION)
    }
}
