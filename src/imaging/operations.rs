//! High-level crop operations.
//!
//! These functions combine calculations with backend execution.
//! They take a ratio, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{GeometryError, compute_crop_rectangle};
use super::params::{AspectRatio, CropParams, CropRectangle, ImageDimensions, Quality};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result type for crop operations.
pub type Result<T> = std::result::Result<T, OperationError>;

/// A fully-resolved crop: where it reads, where it writes, and what it keeps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropPlan {
    pub source: PathBuf,
    pub output: PathBuf,
    pub ratio: AspectRatio,
    pub source_dims: ImageDimensions,
    pub rect: CropRectangle,
}

impl CropPlan {
    fn params(&self, quality: Quality) -> CropParams {
        CropParams {
            source: self.source.clone(),
            output: self.output.clone(),
            rect: self.rect,
            quality,
        }
    }
}

/// Plan a crop without decoding pixels.
///
/// Only the image header is read; useful for dry runs and for testing
/// parameter generation.
pub fn plan_crop(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    ratio: AspectRatio,
) -> Result<CropPlan> {
    let source_dims = backend.identify(source)?;
    let rect = compute_crop_rectangle(source_dims, ratio)?;
    Ok(CropPlan {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        ratio,
        source_dims,
        rect,
    })
}

/// Crop `source` to `ratio` and write the result to `output`.
pub fn crop_image(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    ratio: AspectRatio,
    quality: Quality,
) -> Result<CropPlan> {
    let plan = plan_crop(backend, source, output, ratio)?;
    backend.crop(&plan.params(quality))?;
    Ok(plan)
}
