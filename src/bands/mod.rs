//! Band detection core
//!
//! Color signatures, palettes, the vertical boundary scan and the horizontal
//! extent scan. Everything here is pure computation over an in-memory
//! `RgbImage`; loading, saving and logging happen in the callers.

pub mod errors;
pub mod color;
pub mod palette;
pub mod scanner;
pub mod extent;
pub mod profiles;
#[cfg(test)]
pub(crate) mod tests;

pub use errors::{SliceError, SliceResult};
pub use color::ColorSignature;
pub use palette::{BoundaryRole, Palette};
pub use scanner::{scan_boundaries, BoundaryScanner, Boundaries};
pub use extent::{scan_horizontal_extent, Extent, DEFAULT_MARGIN};
pub use profiles::{builtin_profile, ExtentReference, ExtentRule, LayoutProfile, ProfileSet, DEFAULT_PROFILE};
