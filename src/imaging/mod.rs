//! Image cropping in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Crop rectangle** | [`compute_crop_rectangle`] (pure integer math) |
//! | **Crop + save** | `DynamicImage::crop_imm` + format-specific encoder |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop geometry (unit testable)
//! - **Parameters**: Data structures describing crops
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{GeometryError, compute_crop_rectangle};
pub use operations::{CropPlan, OperationError, crop_image, plan_crop};
pub use params::{
    AspectRatio, CropParams, CropRectangle, ImageDimensions, Quality, RatioError,
};
pub use rust_backend::{RustBackend, has_supported_extension, supported_input_extensions};
