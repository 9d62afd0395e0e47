//! Parameter types for crop operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`calculations`](super::calculations) and
//! [`operations`](super::operations) modules (which decide the crop) and the
//! [`backend`](super::backend) (which does the pixel work).
//!
//! ## Types
//!
//! - [`ImageDimensions`] — Source size in pixels, read from the image header or buffer.
//! - [`AspectRatio`] — The closed set of supported target ratios (1:1, 3:2).
//! - [`CropRectangle`] — Origin + size of the region to extract.
//! - [`Quality`] — Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`CropParams`] — Full specification for one crop: source, output, rectangle, quality.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Width and height of a source image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatioError {
    #[error("Unsupported aspect ratio '{0}' (expected 1:1 or 3:2)")]
    UnsupportedAspectRatio(String),
}

/// Target aspect ratio for a crop.
///
/// Only two ratios are supported. Anything else is rejected at parse time
/// with [`RatioError::UnsupportedAspectRatio`] instead of falling back to a
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AspectRatio {
    /// 1:1
    #[default]
    Square,
    /// 3:2, the classic 35mm frame.
    Standard,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 2] = [AspectRatio::Square, AspectRatio::Standard];

    /// Ratio as `(numerator, denominator)`, i.e. `width:height`.
    pub fn as_fraction(self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1, 1),
            AspectRatio::Standard => (3, 2),
        }
    }

    /// Short label, e.g. `"3:2"`.
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Standard => "3:2",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = RatioError;

    /// Accepts `1:1`, `square`, `3:2` and `standard` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "1:1" | "square" => Ok(AspectRatio::Square),
            "3:2" | "standard" => Ok(AspectRatio::Standard),
            _ => Err(RatioError::UnsupportedAspectRatio(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = RatioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        ratio.label().to_string()
    }
}

/// Region of the source image to keep. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropRectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRectangle {
    /// Whether the rectangle lies entirely inside an image of `dims`.
    pub fn fits_within(&self, dims: ImageDimensions) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(dims.width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(dims.height)
    }

    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }
}

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Parameters for a single crop operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub rect: CropRectangle,
    pub quality: Quality,
}
