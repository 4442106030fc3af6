//! Band cropping
//!
//! Turns the boundaries and extent of a screenshot into crop rectangles and
//! cropped bitmaps. `BandExtractor` ties this to a layout profile so callers
//! only hand in a decoded screenshot.

use image::{imageops, RgbImage};
use log::debug;

use crate::bands::{
    Boundaries, Extent, ExtentReference, ExtentRule, LayoutProfile, SliceError, SliceResult,
    scan_horizontal_extent,
};

use super::region::Region;

/// Crop rectangle of band `index` (1-based)
///
/// The band starts on the row after boundary `index - 1` and ends just
/// before boundary `index`.
///
/// # Errors
/// `IndexOutOfRange` if `index` is 0 or exceeds the band count
pub fn band_region(boundaries: &Boundaries, extent: Extent, index: usize) -> SliceResult<Region> {
    let available = boundaries.band_count();
    if index == 0 || index > available {
        return Err(SliceError::IndexOutOfRange { index, available });
    }

    let rows = boundaries.rows();
    let top = rows[index - 1] + 1;
    let bottom = rows[index];
    Ok(Region::from_edges(extent.left, top, extent.right, bottom))
}

/// Crop band `index` (1-based) out of `bitmap`
///
/// # Errors
/// `EmptyBand` if the band's boundaries are on adjacent rows
pub fn extract_band(
    bitmap: &RgbImage,
    boundaries: &Boundaries,
    extent: Extent,
    index: usize,
) -> SliceResult<RgbImage> {
    let region = band_region(boundaries, extent, index)?;
    if region.is_empty() {
        return Err(SliceError::EmptyBand { index });
    }
    crop(bitmap, region)
}

/// Crop every band, top to bottom
pub fn extract_all_bands(
    bitmap: &RgbImage,
    boundaries: &Boundaries,
    extent: Extent,
) -> SliceResult<Vec<RgbImage>> {
    (1..=boundaries.band_count())
        .map(|index| extract_band(bitmap, boundaries, extent, index))
        .collect()
}

fn crop(bitmap: &RgbImage, region: Region) -> SliceResult<RgbImage> {
    if region.end_x() > bitmap.width() || region.end_y() > bitmap.height() {
        return Err(SliceError::OutOfBounds(format!(
            "crop {:?} outside bitmap of {}x{}", region.edges(), bitmap.width(), bitmap.height()
        )));
    }
    Ok(imageops::crop_imm(bitmap, region.x, region.y, region.width, region.height).to_image())
}

/// Boundaries and extent detected on one screenshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandLayout {
    pub boundaries: Boundaries,
    pub extent: Extent,
}

impl BandLayout {
    pub fn band_count(&self) -> usize {
        self.boundaries.band_count()
    }

    /// Crop rectangle of band `index` (1-based)
    pub fn region(&self, index: usize) -> SliceResult<Region> {
        band_region(&self.boundaries, self.extent, index)
    }

    /// Crop rectangles of every band, top to bottom
    pub fn regions(&self) -> Vec<Region> {
        (1..=self.band_count())
            .filter_map(|index| self.region(index).ok())
            .collect()
    }

    /// Crop band `index` (1-based) out of the screenshot this layout came from
    pub fn band(&self, bitmap: &RgbImage, index: usize) -> SliceResult<RgbImage> {
        extract_band(bitmap, &self.boundaries, self.extent, index)
    }

    /// Crop every band out of the screenshot this layout came from
    pub fn all_bands(&self, bitmap: &RgbImage) -> SliceResult<Vec<RgbImage>> {
        extract_all_bands(bitmap, &self.boundaries, self.extent)
    }
}

/// Band detection driven by a layout profile
#[derive(Debug, Clone)]
pub struct BandExtractor {
    profile: LayoutProfile,
}

impl BandExtractor {
    pub fn new(profile: LayoutProfile) -> Self {
        BandExtractor { profile }
    }

    pub fn profile(&self) -> &LayoutProfile {
        &self.profile
    }

    /// Scan a screenshot for its boundaries and extent
    pub fn locate(&self, bitmap: &RgbImage) -> SliceResult<BandLayout> {
        debug!("Scanning {}x{} bitmap with profile '{}' at column {}",
               bitmap.width(), bitmap.height(), self.profile.name, self.profile.column);

        let boundaries = self.profile.scanner().scan(bitmap, &self.profile.palette)?;
        debug!("Boundary rows: {:?}", boundaries.rows());

        let extent = self.resolve_extent(bitmap, &boundaries)?;
        debug!("Extent: left={}, right={}", extent.left, extent.right);

        Ok(BandLayout { boundaries, extent })
    }

    /// Compute the shared left/right bounds according to the profile
    fn resolve_extent(&self, bitmap: &RgbImage, boundaries: &Boundaries) -> SliceResult<Extent> {
        match self.profile.extent {
            ExtentRule::Fixed { left, right_inset } => {
                Extent::fixed(bitmap.width(), left, right_inset, boundaries.first())
            }
            ExtentRule::Auto { margin, reference } => {
                let row = match reference {
                    ExtentReference::FirstBoundary => boundaries.first(),
                    ExtentReference::FirstSeparator => {
                        boundaries.first_interior().unwrap_or_else(|| boundaries.first())
                    }
                };
                scan_horizontal_extent(bitmap, row, &self.profile.palette.between, margin)
            }
        }
    }

    /// Locate bands and crop the one at `index` (1-based)
    pub fn extract_band(&self, bitmap: &RgbImage, index: usize) -> SliceResult<RgbImage> {
        self.locate(bitmap)?.band(bitmap, index)
    }

    /// Locate bands and crop all of them
    pub fn extract_all_bands(&self, bitmap: &RgbImage) -> SliceResult<Vec<RgbImage>> {
        self.locate(bitmap)?.all_bands(bitmap)
    }
}
