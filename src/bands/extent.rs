//! Horizontal extent of the bands
//!
//! All bands of one image share the same left/right crop bounds. They are
//! found once, on a single reference row, by locating the run of separator
//! pixels and widening it by a fixed margin.

use image::RgbImage;

use super::color::ColorSignature;
use super::errors::{SliceError, SliceResult};

/// Default widening applied on both sides of the separator run
pub const DEFAULT_MARGIN: u32 = 25;

/// Left/right crop bounds, right exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub left: u32,
    pub right: u32,
}

impl Extent {
    pub fn new(left: u32, right: u32) -> Self {
        Extent { left, right }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Fixed bounds: `left` from the left edge, `right_inset` in from the right edge
    ///
    /// # Errors
    /// `ExtentNotFound` when the insets leave no columns.
    pub fn fixed(bitmap_width: u32, left: u32, right_inset: u32, row: u32) -> SliceResult<Self> {
        let right = bitmap_width.saturating_sub(right_inset);
        if left >= right {
            return Err(SliceError::ExtentNotFound { row });
        }
        Ok(Extent { left, right })
    }
}

/// Find the separator run on `reference_row` and widen it by `margin`
///
/// The left bound is the first column matching any signature minus the
/// margin; the right bound is the first following column that stops
/// matching plus the margin. Both are clamped to the bitmap.
pub fn scan_horizontal_extent(
    bitmap: &RgbImage,
    reference_row: u32,
    between: &[ColorSignature],
    margin: u32,
) -> SliceResult<Extent> {
    let (width, height) = bitmap.dimensions();
    if reference_row >= height {
        return Err(SliceError::OutOfBounds(format!(
            "row {} outside bitmap of height {}", reference_row, height
        )));
    }

    let is_separator = |x: u32| {
        let pixel = bitmap.get_pixel(x, reference_row);
        between.iter().any(|sig| sig.matches(pixel))
    };

    let run_start = (0..width)
        .find(|&x| is_separator(x))
        .ok_or(SliceError::ExtentNotFound { row: reference_row })?;
    let run_end = (run_start..width)
        .find(|&x| !is_separator(x))
        .unwrap_or(width);

    Ok(Extent {
        left: run_start.saturating_sub(margin),
        right: run_end.saturating_add(margin).min(width),
    })
}
