//! Connected-component labeling of alpha masks
//!
//! This module turns the alpha channel of an RGBA image into a binary
//! foreground mask and labels its connected components.

mod alpha_mask;
mod connectivity;
mod label_map;

pub use alpha_mask::AlphaMask;
pub use connectivity::Connectivity;
pub use label_map::LabelMap;
