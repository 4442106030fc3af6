//! Vertical boundary scan
//!
//! Walks one column of a bitmap top to bottom and records the rows whose
//! color matches the palette. The scan stops at the first `end` row.

use std::collections::BTreeSet;
use image::RgbImage;

use super::errors::{SliceError, SliceResult};
use super::palette::{BoundaryRole, Palette};

/// Sorted, deduplicated boundary rows of one bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries {
    rows: Vec<u32>,
    start: u32,
    end: u32,
}

impl Boundaries {
    /// Build from the start row, end row and interior separator rows
    pub fn new(start: u32, end: u32, interior: impl IntoIterator<Item = u32>) -> Self {
        let mut set: BTreeSet<u32> = interior.into_iter().collect();
        set.insert(start);
        set.insert(end);
        Boundaries { rows: set.into_iter().collect(), start, end }
    }

    /// All boundary rows, ascending
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Row of the `start` match
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Row of the `end` match
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Topmost boundary row
    pub fn first(&self) -> u32 {
        self.rows[0]
    }

    /// Topmost separator row, if any separator was seen
    pub fn first_interior(&self) -> Option<u32> {
        self.rows
            .iter()
            .copied()
            .find(|&row| row != self.start && row != self.end)
    }

    /// Number of bands between consecutive boundaries
    pub fn band_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

/// Configurable vertical scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryScanner {
    /// Column probed on every row
    pub column: u32,
    /// Extra rows skipped after a start or separator match
    pub skip_after_match: u32,
}

impl BoundaryScanner {
    pub fn new(column: u32) -> Self {
        BoundaryScanner { column, skip_after_match: 0 }
    }

    pub fn with_skip_after_match(mut self, rows: u32) -> Self {
        self.skip_after_match = rows;
        self
    }

    /// Scan the bitmap and collect boundary rows
    ///
    /// # Errors
    /// * `OutOfBounds` if the column lies outside the bitmap
    /// * `BoundaryNotFound` if the gate, start or end never matched
    pub fn scan(&self, bitmap: &RgbImage, palette: &Palette) -> SliceResult<Boundaries> {
        let (width, height) = bitmap.dimensions();
        if self.column >= width {
            return Err(SliceError::OutOfBounds(format!(
                "column {} outside bitmap of width {}", self.column, width
            )));
        }

        let mut gated = palette.gate.is_none();
        let mut start = None;
        let mut end = None;
        let mut interior = BTreeSet::new();

        let mut y = 0;
        while y < height {
            let pixel = bitmap.get_pixel(self.column, y);
            if !gated && palette.is_gate(pixel) {
                gated = true;
            }

            let mut step: u32 = 1;
            if gated {
                match palette.classify(pixel) {
                    Some(BoundaryRole::Start) => {
                        start = Some(y);
                        step = step.saturating_add(self.skip_after_match);
                    }
                    Some(BoundaryRole::Between) => {
                        interior.insert(y);
                        step = step.saturating_add(self.skip_after_match);
                    }
                    Some(BoundaryRole::End) => {
                        end = Some(y);
                        break;
                    }
                    _ => {}
                }
            }
            y = y.saturating_add(step);
        }

        if !gated {
            return Err(SliceError::BoundaryNotFound(BoundaryRole::Gate));
        }
        let start = start.ok_or(SliceError::BoundaryNotFound(BoundaryRole::Start))?;
        let end = end.ok_or(SliceError::BoundaryNotFound(BoundaryRole::End))?;

        Ok(Boundaries::new(start, end, interior))
    }
}

/// Scan `column` of `bitmap` for boundary rows with no row skipping
pub fn scan_boundaries(bitmap: &RgbImage, column: u32, palette: &Palette) -> SliceResult<Boundaries> {
    BoundaryScanner::new(column).scan(bitmap, palette)
}
