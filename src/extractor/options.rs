//! Options controlling region extraction

use std::fmt;

use crate::labeling::Connectivity;

/// How the alpha channel of each crop is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// 255 on the region's own pixels, 0 elsewhere
    #[default]
    Binary,
    /// Source alpha on the region's own pixels, 0 elsewhere
    Preserve,
}

impl fmt::Display for AlphaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphaMode::Binary => write!(f, "binary"),
            AlphaMode::Preserve => write!(f, "preserve"),
        }
    }
}

/// Settings for a [`RegionExtractor`](super::RegionExtractor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractionOptions {
    /// Pixel adjacency used for labeling
    pub connectivity: Connectivity,
    /// Alpha handling for the written crops
    pub alpha_mode: AlphaMode,
}

impl ExtractionOptions {
    pub fn new(connectivity: Connectivity, alpha_mode: AlphaMode) -> Self {
        ExtractionOptions { connectivity, alpha_mode }
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_alpha_mode(mut self, alpha_mode: AlphaMode) -> Self {
        self.alpha_mode = alpha_mode;
        self
    }
}
