//! Crop rectangle for one band
//!
//! Coordinates are in pixels with (0,0) at the top-left corner of the
//! screenshot. Right and bottom edges are exclusive.

/// Rectangle cut out of a screenshot (in pixel coordinates)
///
/// Stored as top-left corner plus size; `edges` gives the
/// `(left, top, right, bottom)` form used when talking about bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region from its corner and size
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Create a region from its edges
    ///
    /// An inverted pair of edges yields an empty region rather than wrapping.
    ///
    /// # Arguments
    /// * `left` - First column inside the region
    /// * `top` - First row inside the region
    /// * `right` - Column immediately after the region
    /// * `bottom` - Row immediately after the region
    pub fn from_edges(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Region {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Edge form `(left, top, right, bottom)`
    pub fn edges(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.end_x(), self.end_y())
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_round_trip() {
        let region = Region::from_edges(75, 41, 175, 70);
        assert_eq!(region, Region::new(75, 41, 100, 29));
        assert_eq!(region.edges(), (75, 41, 175, 70));
    }

    #[test]
    fn inverted_edges_are_empty() {
        let region = Region::from_edges(10, 50, 5, 40);
        assert!(region.is_empty());
        assert_eq!(region.width, 0);
        assert_eq!(region.height, 0);
    }
}
