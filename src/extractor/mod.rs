//! Band extraction from screenshots
//!
//! This module turns detected boundaries into crop rectangles and cropped
//! bitmaps, either with explicit boundaries or driven by a layout profile.

mod region;
mod band_extractor;

pub use region::Region;
pub use band_extractor::{band_region, extract_band, extract_all_bands, BandExtractor, BandLayout};
