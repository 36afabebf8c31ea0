//! Pixel adjacency rules for labeling

use std::fmt;
use std::str::FromStr;

use imageproc::region_labelling;

/// Which neighbors count as touching when growing a region
///
/// `Four` joins pixels sharing an edge only, so diagonally touching pixels
/// end up in separate regions. `Eight` also joins pixels sharing a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Four,
    Eight,
}

impl From<Connectivity> for region_labelling::Connectivity {
    fn from(connectivity: Connectivity) -> Self {
        match connectivity {
            Connectivity::Four => region_labelling::Connectivity::Four,
            Connectivity::Eight => region_labelling::Connectivity::Eight,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::Four => write!(f, "4-connected"),
            Connectivity::Eight => write!(f, "8-connected"),
        }
    }
}

impl FromStr for Connectivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "4" | "four" => Ok(Connectivity::Four),
            "8" | "eight" => Ok(Connectivity::Eight),
            other => Err(format!("Unknown connectivity '{}', expected 4 or 8", other)),
        }
    }
}
