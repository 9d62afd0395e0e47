//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::{AspectRatio, CropRectangle, ImageDimensions};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Invalid image dimensions {width}x{height}: both sides must be positive")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Compute the largest centered rectangle of `ratio` inside `dims`.
///
/// The full width is kept when the matching height fits; otherwise the full
/// height is kept and the width derived from it. Both derived sides are
/// floored. Leftover margins are split evenly, with an odd pixel going to
/// the bottom/right.
///
/// # Examples
/// ```
/// use ratio_crop::imaging::{AspectRatio, ImageDimensions, compute_crop_rectangle};
///
/// // 900x800 at 3:2 keeps the full width: 900x600, 100px trimmed top and bottom
/// let rect = compute_crop_rectangle(ImageDimensions::new(900, 800), AspectRatio::Standard).unwrap();
/// assert_eq!((rect.x, rect.y, rect.width, rect.height), (0, 100, 900, 600));
///
/// // Square takes the short edge
/// let rect = compute_crop_rectangle(ImageDimensions::new(640, 480), AspectRatio::Square).unwrap();
/// assert_eq!((rect.x, rect.y, rect.width, rect.height), (80, 0, 480, 480));
/// ```
pub fn compute_crop_rectangle(
    dims: ImageDimensions,
    ratio: AspectRatio,
) -> Result<CropRectangle, GeometryError> {
    let invalid = GeometryError::InvalidDimensions {
        width: dims.width,
        height: dims.height,
    };
    if dims.width == 0 || dims.height == 0 {
        return Err(invalid);
    }

    let (width, height) = (u64::from(dims.width), u64::from(dims.height));
    let (num, den) = ratio.as_fraction();
    let (num, den) = (u64::from(num), u64::from(den));

    // Width-first; fall back to the full height when the derived height overflows it.
    let (target_w, target_h) = {
        let h = width * den / num;
        if h > height {
            (height * num / den, height)
        } else {
            (width, h)
        }
    };

    // floor(w*den/num) > h implies w > h*num/den, so neither subtraction can
    // underflow for the supported ratios. Rounding can still leave a derived
    // side at zero for 1-pixel sources.
    let (Some(slack_x), Some(slack_y)) = (width.checked_sub(target_w), height.checked_sub(target_h))
    else {
        return Err(invalid);
    };
    if target_w == 0 || target_h == 0 {
        return Err(invalid);
    }

    // Each value is bounded by the source dimension, which came in as u32.
    Ok(CropRectangle {
        x: (slack_x / 2) as u32,
        y: (slack_y / 2) as u32,
        width: target_w as u32,
        height: target_h as u32,
    })
}
