//! Debug overlay utilities
//!
//! Draws the detected layout onto a copy of the screenshot: one red line per
//! boundary row across the full width and one red line per extent edge down
//! the full height. Useful for checking a profile against a new rendering.

use image::{Rgb, RgbImage};
use log::info;

use crate::extractor::BandLayout;

/// Color of the overlay lines
pub const LINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Draw boundary rows and extent edges onto a copy of `bitmap`
///
/// # Arguments
/// * `bitmap` - The screenshot the layout was detected on
/// * `layout` - Detected boundaries and extent
///
/// # Returns
/// A new image with the lines drawn
pub fn draw_layout(bitmap: &RgbImage, layout: &BandLayout) -> RgbImage {
    let mut canvas = bitmap.clone();
    let (width, height) = canvas.dimensions();

    info!("Drawing {} boundary rows and extent {}..{}",
          layout.boundaries.rows().len(), layout.extent.left, layout.extent.right);

    for &y in layout.boundaries.rows() {
        if y < height {
            for x in 0..width {
                canvas.put_pixel(x, y, LINE_COLOR);
            }
        }
    }

    // The right bound is exclusive; draw on the last column inside it
    let right_edge = layout.extent.right.saturating_sub(1);
    for x in [layout.extent.left, right_edge] {
        if x < width {
            for y in 0..height {
                canvas.put_pixel(x, y, LINE_COLOR);
            }
        }
    }

    canvas
}
