pub mod bands;
pub mod extractor;
pub mod utils;
pub mod batch;
pub mod commands;
pub mod api;

pub use crate::api::{BandSlicer, SliceRequest, SavedBand};

pub use bands::{
    scan_boundaries, scan_horizontal_extent, Boundaries, ColorSignature, Extent, LayoutProfile,
    Palette, ProfileSet, SliceError, SliceResult,
};
pub use extractor::{band_region, extract_all_bands, extract_band, BandExtractor, BandLayout, Region};
