//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageDecoder::dimensions` + EXIF orientation (header only) |
//! | Decode (JPEG, PNG, BMP, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Orientation | `image::DynamicImage::apply_orientation` |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder::new_with_quality` |
//! | Encode → PNG, BMP, TIFF, WebP | `image::DynamicImage::write_to` (lossless) |
//!
//! ## Orientation
//!
//! Phone cameras store pixels in sensor order and record the rotation in the
//! EXIF orientation tag. Every size reported here is the size as displayed:
//! [`load_image`] rotates the pixels upright and `identify` swaps width and
//! height for quarter turns. The written crop carries no EXIF, so it is
//! stored upright.

use super::backend::{BackendError, ImageBackend};
use super::params::{CropParams, ImageDimensions, Quality};
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use std::io::BufWriter;
use std::path::Path;
use std::sync::LazyLock;

/// Extensions offered by the file picker, paired with the decoder they need.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("bmp", ImageFormat::Bmp),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether `path` has one of the [`supported_input_extensions`] (case-insensitive).
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, err: &dyn std::fmt::Display) -> BackendError {
    BackendError::Decode(format!("{}: {}", path.display(), err))
}

/// Open a decoder for `path`, sniffing the format from the file contents
/// and falling back to the extension.
fn open_decoder(path: &Path) -> Result<impl ImageDecoder, BackendError> {
    ImageReader::open(path)
        .map_err(|e| decode_error(path, &e))?
        .with_guessed_format()
        .map_err(|e| decode_error(path, &e))?
        .into_decoder()
        .map_err(|e| decode_error(path, &e))
}

/// The EXIF orientation of the image behind `decoder`.
///
/// A missing or unreadable tag means the pixels are already upright.
fn read_orientation(decoder: &mut impl ImageDecoder) -> Orientation {
    decoder.orientation().unwrap_or(Orientation::NoTransforms)
}

/// Size of a `width`x`height` stored image once `orientation` is applied.
pub fn oriented_dimensions(width: u32, height: u32, orientation: Orientation) -> ImageDimensions {
    match orientation {
        Orientation::Rotate90
        | Orientation::Rotate270
        | Orientation::Rotate90FlipH
        | Orientation::Rotate270FlipH => ImageDimensions::new(height, width),
        _ => ImageDimensions::new(width, height),
    }
}

/// Load and decode an image from disk, rotated upright.
///
/// The format is sniffed from the file contents, so a mislabeled file still
/// decodes. The EXIF orientation is applied to the pixels, and the returned
/// dimensions are those of the upright image.
pub fn load_image(path: &Path) -> Result<(DynamicImage, ImageDimensions), BackendError> {
    let mut decoder = open_decoder(path)?;
    let orientation = read_orientation(&mut decoder);
    let mut img = DynamicImage::from_decoder(decoder).map_err(|e| decode_error(path, &e))?;
    img.apply_orientation(orientation);
    let dims = ImageDimensions::new(img.width(), img.height());
    Ok((img, dims))
}

/// Save a DynamicImage to the given path, inferring the format from the extension.
///
/// `quality` only affects JPEG output; every other format is lossless.
pub fn save_image(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let encode_err =
        |e: &dyn std::fmt::Display| BackendError::Encode(format!("{}: {}", path.display(), e));

    let format = ImageFormat::from_path(path).map_err(|e| encode_err(&e))?;
    if !format.writing_enabled() {
        return Err(encode_err(&format!("no encoder for {format:?}")));
    }

    let file = std::fs::File::create(path).map_err(|e| encode_err(&e))?;
    let mut writer = BufWriter::new(file);

    match format {
        ImageFormat::Jpeg => {
            // JPEG has no alpha channel and only 8-bit samples
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                &mut writer,
                quality.value() as u8,
            );
            rgb.write_with_encoder(encoder)
                .map_err(|e| encode_err(&e))?;
        }
        ImageFormat::WebP | ImageFormat::Bmp => {
            // Both encoders only take 8-bit RGB(A)
            let eight_bit = match img {
                DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img.clone(),
                other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
                other => DynamicImage::ImageRgb8(other.to_rgb8()),
            };
            eight_bit
                .write_to(&mut writer, format)
                .map_err(|e| encode_err(&e))?;
        }
        _ => img.write_to(&mut writer, format).map_err(|e| encode_err(&e))?,
    }

    std::io::Write::flush(&mut writer).map_err(|e| encode_err(&e))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<ImageDimensions, BackendError> {
        let mut decoder = open_decoder(path)?;
        let (width, height) = decoder.dimensions();
        Ok(oriented_dimensions(width, height, read_orientation(&mut decoder)))
    }

    fn crop(&self, params: &CropParams) -> Result<ImageDimensions, BackendError> {
        let (img, dims) = load_image(&params.source)?;

        // The plan came from the header; crop_imm would clamp silently on a mismatch
        if !params.rect.fits_within(dims) {
            return Err(BackendError::Decode(format!(
                "{}: crop {}x{}+{}+{} exceeds decoded image {}",
                params.source.display(),
                params.rect.width,
                params.rect.height,
                params.rect.x,
                params.rect.y,
                dims
            )));
        }

        let rect = params.rect;
        let cropped = img.crop_imm(rect.x, rect.y, rect.width, rect.height);
        save_image(&cropped, &params.output, params.quality)?;
        Ok(ImageDimensions::new(cropped.width(), cropped.height()))
    }
}
