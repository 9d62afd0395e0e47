//! Shared test utilities for the ratio-crop test suite.
//!
//! Synthetic images are generated on the fly rather than shipped as
//! fixtures, so each test gets exactly the dimensions it asserts on.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let source = tmp.path().join("photo.png");
//! write_gradient_png(&source, 300, 200);
//! assert_eq!(read_dimensions(&source), (300, 200));
//! ```

use image::{ImageEncoder, RgbImage, RgbaImage};
use std::path::Path;

/// Pixel value encoding the pixel's own position, so crops can be checked
/// for the right offset and not just the right size.
pub fn gradient_pixel(x: u32, y: u32) -> [u8; 3] {
    [(x % 256) as u8, (y % 256) as u8, 128]
}

/// Write an RGB PNG where each pixel is [`gradient_pixel`].
pub fn write_gradient_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| image::Rgb(gradient_pixel(x, y)));
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Write an RGBA PNG with a half-transparent alpha channel.
pub fn write_rgba_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b] = gradient_pixel(x, y);
        image::Rgba([r, g, b, 128])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Create a small valid JPEG file with the given dimensions.
pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| image::Rgb(gradient_pixel(x, y)));
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Color of the left half of [`write_oriented_jpeg`] images, as stored.
pub const STORED_LEFT: [u8; 3] = [240, 20, 20];
/// Color of the right half of [`write_oriented_jpeg`] images, as stored.
pub const STORED_RIGHT: [u8; 3] = [20, 20, 240];

/// Wrap a single EXIF orientation tag (0x0112) in an APP1 segment.
pub fn exif_orientation_segment(orientation: u16) -> Vec<u8> {
    let mut exif = b"Exif\0\0".to_vec();
    // Little-endian TIFF header, first IFD right after it
    exif.extend_from_slice(b"II*\0");
    exif.extend_from_slice(&8u32.to_le_bytes());
    // One entry: tag, type SHORT, count 1, value padded to four bytes
    exif.extend_from_slice(&1u16.to_le_bytes());
    exif.extend_from_slice(&0x0112u16.to_le_bytes());
    exif.extend_from_slice(&3u16.to_le_bytes());
    exif.extend_from_slice(&1u32.to_le_bytes());
    exif.extend_from_slice(&orientation.to_le_bytes());
    exif.extend_from_slice(&[0, 0]);
    // No next IFD
    exif.extend_from_slice(&0u32.to_le_bytes());

    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&((exif.len() + 2) as u16).to_be_bytes());
    segment.extend_from_slice(&exif);
    segment
}

/// Write a JPEG stored as `width`x`height` with an EXIF orientation tag.
///
/// The stored left half is [`STORED_LEFT`] and the right half
/// [`STORED_RIGHT`], so tests can tell which way the pixels were turned.
pub fn write_oriented_jpeg(path: &Path, width: u32, height: u32, orientation: u16) {
    let img = RgbImage::from_fn(width, height, |x, _| {
        image::Rgb(if x < width / 2 { STORED_LEFT } else { STORED_RIGHT })
    });
    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 95)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();

    // APP1 goes straight after the SOI marker
    let mut bytes = jpeg[..2].to_vec();
    bytes.extend_from_slice(&exif_orientation_segment(orientation));
    bytes.extend_from_slice(&jpeg[2..]);
    std::fs::write(path, bytes).unwrap();
}

/// Whether `pixel` is within JPEG noise of `expected`.
pub fn close_to(pixel: [u8; 3], expected: [u8; 3]) -> bool {
    pixel
        .iter()
        .zip(expected)
        .all(|(&a, b)| a.abs_diff(b) <= 40)
}

/// Read back an image's dimensions. Panics on failure.
pub fn read_dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}
