//! Utility modules for common functionality
//!
//! This module provides logging and progress reporting used by the CLI and
//! the batch processor.

pub mod logger;
pub(crate) mod progress;
