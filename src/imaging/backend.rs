//! Image I/O backend trait and shared error type.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify (header-only dimension read) and crop (decode, extract,
//! encode).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::{CropParams, ImageDimensions};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Trait for image I/O backends.
///
/// The rest of the crate only talks to images through this trait, so the
/// crop pipeline can be tested without decoding a single pixel.
pub trait ImageBackend {
    /// Get image dimensions without decoding pixel data.
    fn identify(&self, path: &Path) -> Result<ImageDimensions, BackendError>;

    /// Decode `params.source`, extract `params.rect` and write it to
    /// `params.output`. Returns the dimensions of the written image.
    fn crop(&self, params: &CropParams) -> Result<ImageDimensions, BackendError>;
}
