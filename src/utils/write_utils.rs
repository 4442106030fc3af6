//! Band image writing utilities
//!
//! Saves cropped bands to disk, creating parent directories and honoring the
//! caller's choice between keeping and replacing existing files.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use image::{ImageFormat, RgbImage};
use log::{debug, info};

use crate::bands::errors::SliceResult;

/// What to do when the destination file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavePolicy {
    /// Leave the existing file untouched
    #[default]
    SkipIfExists,
    /// Replace the existing file
    Overwrite,
}

impl SavePolicy {
    /// Policy for an `--overwrite` style flag
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite { SavePolicy::Overwrite } else { SavePolicy::SkipIfExists }
    }
}

/// Result of one save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written,
    Skipped,
}

/// Save a band image under the given policy
///
/// The output format follows the file extension, as with `image::save`.
/// The image is encoded in memory first, so a failed encode leaves nothing
/// on disk.
///
/// # Arguments
/// * `image` - Cropped band
/// * `path` - Destination file
/// * `policy` - Whether an existing file may be replaced
///
/// # Returns
/// Whether the file was written or skipped
pub fn save_band(image: &RgbImage, path: &Path, policy: SavePolicy) -> SliceResult<SaveOutcome> {
    if policy == SavePolicy::SkipIfExists && path.exists() {
        info!("Keeping existing {}", path.display());
        return Ok(SaveOutcome::Skipped);
    }

    let format = ImageFormat::from_path(path)?;
    let mut encoded = Cursor::new(Vec::new());
    image.write_to(&mut encoded, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, encoded.into_inner())?;
    debug!("Wrote {}x{} band to {}", image.width(), image.height(), path.display());
    Ok(SaveOutcome::Written)
}
