//! One crop attempt, end to end.
//!
//! [`run_crop`] resolves the output path and executes the crop for a known
//! file; [`run_interactive`] asks a [`SelectionUi`] for the file and ratio
//! first. Every failure along the way is a [`CropError`], which
//! [`CropError::into_notification`] turns into the single message the user
//! sees.

use crate::config::{ConfigError, CropConfig};
use crate::imaging::operations::{CropPlan, OperationError, crop_image, plan_crop};
use crate::imaging::{AspectRatio, BackendError, GeometryError, ImageBackend, RatioError};
use crate::naming::cropped_output_path;
use crate::selection::{Notification, SelectionError, SelectionUi};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error(transparent)]
    InvalidDimensions(#[from] GeometryError),
    #[error(transparent)]
    UnsupportedAspectRatio(#[from] RatioError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to render plan: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<OperationError> for CropError {
    fn from(err: OperationError) -> Self {
        match err {
            OperationError::Geometry(e) => CropError::InvalidDimensions(e),
            OperationError::Backend(e) => CropError::Backend(e),
        }
    }
}

impl CropError {
    /// A dismissed file or ratio choice is informational; everything else is an error.
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self,
            CropError::InvalidSelection(
                SelectionError::NoFileSelected | SelectionError::NoRatioSelected
            )
        )
    }

    pub fn into_notification(self) -> Notification {
        if self.is_cancellation() {
            Notification::Info(self.to_string())
        } else {
            Notification::Error(self.to_string())
        }
    }
}

/// What to crop and where the result goes.
#[derive(Debug, Clone, PartialEq)]
pub struct CropRequest {
    pub source: PathBuf,
    pub ratio: AspectRatio,
    /// Explicit output path; `None` uses the suffix naming convention.
    pub output: Option<PathBuf>,
}

impl CropRequest {
    pub fn new(source: impl Into<PathBuf>, ratio: AspectRatio) -> Self {
        Self {
            source: source.into(),
            ratio,
            output: None,
        }
    }

    pub fn output_path(&self, config: &CropConfig) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| cropped_output_path(&self.source, &config.suffix))
    }
}

/// Refuse to write over the source, whatever path the user gave.
fn check_distinct(source: &Path, output: &Path) -> Result<(), CropError> {
    let same = match (source.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => source == output,
    };
    if same {
        return Err(CropError::Backend(BackendError::Encode(format!(
            "{}: output would overwrite the source image",
            output.display()
        ))));
    }
    Ok(())
}

/// Compute the crop for `request` without writing anything.
pub fn run_plan(
    backend: &impl ImageBackend,
    config: &CropConfig,
    request: &CropRequest,
) -> Result<CropPlan, CropError> {
    let output = request.output_path(config);
    Ok(plan_crop(backend, &request.source, &output, request.ratio)?)
}

/// Crop `request.source` and write the result.
pub fn run_crop(
    backend: &impl ImageBackend,
    config: &CropConfig,
    request: &CropRequest,
) -> Result<CropPlan, CropError> {
    let output = request.output_path(config);
    check_distinct(&request.source, &output)?;
    Ok(crop_image(
        backend,
        &request.source,
        &output,
        request.ratio,
        config.quality(),
    )?)
}

/// Ask `ui` for a file and ratio, then crop.
///
/// `ratio` skips the ratio question when already known.
pub fn run_interactive(
    backend: &impl ImageBackend,
    ui: &mut dyn SelectionUi,
    config: &CropConfig,
    ratio: Option<AspectRatio>,
) -> Result<CropPlan, CropError> {
    let source = ui.select_path()?;
    let ratio = match ratio {
        Some(ratio) => ratio,
        None => ui.select_ratio(config.ratio)?,
    };
    run_crop(backend, config, &CropRequest::new(source, ratio))
}
