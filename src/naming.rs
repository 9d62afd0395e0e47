//! Output filename convention for cropped images.
//!
//! A crop is written next to its source with a suffix inserted before the
//! extension:
//! - `/photos/dawn.jpg` → `/photos/dawn_cropped.jpg`
//! - `/photos/archive.tar.png` → `/photos/archive.tar_cropped.png` (only the last extension moves)
//! - `/photos/.hidden` → `/photos/.hidden_cropped` (dotfiles have no extension)
//! - `/photos/scan` → `/photos/scan_cropped`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix used when neither the config nor the CLI override it.
pub const DEFAULT_SUFFIX: &str = "_cropped";

/// Build the output path for a crop of `source`.
///
/// Non-UTF-8 stems and extensions are preserved as-is.
pub fn cropped_output_path(source: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = source.file_stem() {
        name.push(stem);
    }
    name.push(suffix);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    source.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_suffix_before_extension() {
        assert_eq!(
            cropped_output_path(Path::new("/photos/dawn.jpg"), DEFAULT_SUFFIX),
            PathBuf::from("/photos/dawn_cropped.jpg")
        );
    }

    #[test]
    fn keeps_extension_case() {
        assert_eq!(
            cropped_output_path(Path::new("/photos/IMG_0042.JPEG"), DEFAULT_SUFFIX),
            PathBuf::from("/photos/IMG_0042_cropped.JPEG")
        );
    }

    #[test]
    fn only_last_extension_moves() {
        assert_eq!(
            cropped_output_path(Path::new("archive.tar.png"), DEFAULT_SUFFIX),
            PathBuf::from("archive.tar_cropped.png")
        );
    }

    #[test]
    fn relative_path_stays_relative() {
        assert_eq!(
            cropped_output_path(Path::new("shots/sunset.png"), DEFAULT_SUFFIX),
            PathBuf::from("shots/sunset_cropped.png")
        );
    }

    #[test]
    fn dotfile_has_no_extension() {
        assert_eq!(
            cropped_output_path(Path::new("/photos/.hidden"), DEFAULT_SUFFIX),
            PathBuf::from("/photos/.hidden_cropped")
        );
    }

    #[test]
    fn no_extension() {
        assert_eq!(
            cropped_output_path(Path::new("/photos/scan"), DEFAULT_SUFFIX),
            PathBuf::from("/photos/scan_cropped")
        );
    }

    #[test]
    fn custom_suffix() {
        assert_eq!(
            cropped_output_path(Path::new("dawn.webp"), "-square"),
            PathBuf::from("dawn-square.webp")
        );
    }

    #[test]
    fn never_equals_source() {
        for source in ["a.png", "a", ".a", "dir/a.b.c"] {
            let source = Path::new(source);
            assert_ne!(cropped_output_path(source, DEFAULT_SUFFIX), source);
        }
    }
}
