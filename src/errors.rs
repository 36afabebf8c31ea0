//! Custom error types for sprite splitting

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while splitting images into regions
#[derive(Debug)]
pub enum SplitError {
    /// I/O error
    IoError(io::Error),
    /// The input could not be opened or decoded as an image
    UnreadableImage {
        path: PathBuf,
        source: image::ImageError,
    },
    /// The input folder is missing or cannot be listed
    InputFolderError { path: PathBuf, source: io::Error },
    /// The alpha channel has no pixel with alpha > 0
    NoForegroundRegions { path: Option<PathBuf> },
    /// An output directory or file could not be created
    OutputPathError { path: PathBuf, reason: String },
    /// Invalid command-line options
    InvalidArguments(String),
    /// Some files of a batch failed
    PartialFailure { failed: usize, total: usize },
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::IoError(e) => write!(f, "I/O error: {}", e),
            SplitError::UnreadableImage { path, source } => {
                write!(f, "Unreadable image {}: {}", path.display(), source)
            }
            SplitError::InputFolderError { path, source } => {
                write!(f, "Cannot read input folder {}: {}", path.display(), source)
            }
            SplitError::NoForegroundRegions { path: Some(path) } => {
                write!(f, "No foreground regions in {}", path.display())
            }
            SplitError::NoForegroundRegions { path: None } => {
                write!(f, "No foreground regions in image")
            }
            SplitError::OutputPathError { path, reason } => {
                write!(f, "Cannot write output {}: {}", path.display(), reason)
            }
            SplitError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            SplitError::PartialFailure { failed, total } => {
                write!(f, "{} of {} images failed", failed, total)
            }
            SplitError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::IoError(e) => Some(e),
            SplitError::UnreadableImage { source, .. } => Some(source),
            SplitError::InputFolderError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SplitError {
    fn from(error: io::Error) -> Self {
        SplitError::IoError(error)
    }
}

/// Result type for splitting operations
pub type SplitResult<T> = Result<T, SplitError>;
