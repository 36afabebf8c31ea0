//! Recognized input file types

use std::path::Path;

/// Raster extensions accepted as input (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Check if a path names a supported raster file by its extension
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the extension is one of [`SUPPORTED_EXTENSIONS`]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|s| *s == ext)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("dir/B.JPEG")));
        assert!(is_supported_image(Path::new("c.Gif")));
        assert!(is_supported_image(Path::new("d.bmp")));
        assert!(is_supported_image(Path::new("e.jpg")));
    }

    #[test]
    fn test_other_files_are_rejected() {
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("image.tiff")));
        assert!(!is_supported_image(Path::new("png")));
        assert!(!is_supported_image(Path::new("archive.png.zip")));
    }
}
