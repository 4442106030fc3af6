use std::path::{Path, PathBuf};
use image::RgbImage;
use log::{info, warn};

use crate::bands::errors::{SliceError, SliceResult};
use crate::bands::{builtin_profile, LayoutProfile};
use crate::extractor::{BandExtractor, BandLayout};
use crate::utils::logger::Logger;
use crate::utils::naming_utils::{NameFields, NameTemplate};
use crate::utils::overlay_utils;
use crate::utils::selection_utils::BandSelection;
use crate::utils::write_utils::{self, SaveOutcome, SavePolicy};

/// Where and how sliced bands are written
#[derive(Debug, Clone)]
pub struct SliceRequest {
    /// Bands to save
    pub selection: BandSelection,
    /// Directory the name template is resolved against
    pub output_dir: PathBuf,
    pub template: NameTemplate,
    pub movie: Option<String>,
    pub page: Option<u32>,
    pub review: Option<u32>,
    pub policy: SavePolicy,
}

impl SliceRequest {
    /// Save `selection` into `output_dir` with the default template
    pub fn new(selection: BandSelection, output_dir: impl Into<PathBuf>) -> Self {
        SliceRequest {
            selection,
            output_dir: output_dir.into(),
            template: NameTemplate::default(),
            movie: None,
            page: None,
            review: None,
            policy: SavePolicy::default(),
        }
    }
}

/// One band handled by a slice request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedBand {
    pub index: usize,
    pub path: PathBuf,
    pub outcome: SaveOutcome,
}

/// Main interface to the bandslicer library
pub struct BandSlicer<'a> {
    logger: &'a Logger,
    extractor: BandExtractor,
}

impl<'a> BandSlicer<'a> {
    /// Create a new BandSlicer instance
    ///
    /// # Arguments
    /// * `profile` - Layout profile used for every screenshot
    /// * `logger` - Logger recording detected layouts and written files
    pub fn new(profile: LayoutProfile, logger: &'a Logger) -> Self {
        BandSlicer { logger, extractor: BandExtractor::new(profile) }
    }

    /// Create an instance using a built-in profile
    pub fn with_builtin_profile(name: &str, logger: &'a Logger) -> SliceResult<Self> {
        Ok(Self::new(builtin_profile(name)?, logger))
    }

    pub fn profile(&self) -> &LayoutProfile {
        self.extractor.profile()
    }

    /// Decode a screenshot into an RGB bitmap
    pub fn load(path: &Path) -> SliceResult<RgbImage> {
        let image = image::open(path)?;
        Ok(image.to_rgb8())
    }

    /// Detect the band layout of a screenshot file
    pub fn detect(&self, input: &Path) -> SliceResult<BandLayout> {
        let bitmap = Self::load(input)?;
        let layout = self.extractor.locate(&bitmap)?;
        self.logger.log_layout(&input.display().to_string(), &layout)?;
        Ok(layout)
    }

    /// Human-readable summary of a screenshot's layout
    pub fn describe(&self, input: &Path) -> SliceResult<String> {
        let layout = self.detect(input)?;

        let mut result = format!("Layout of {} (profile '{}'):\n", input.display(), self.profile().name);
        result.push_str(&format!("  Boundary rows: {:?}\n", layout.boundaries.rows()));
        result.push_str(&format!("  Extent: left={}, right={}\n", layout.extent.left, layout.extent.right));
        result.push_str(&format!("  Bands: {}\n", layout.band_count()));
        for (i, region) in layout.regions().iter().enumerate() {
            let (left, top, right, bottom) = region.edges();
            result.push_str(&format!(
                "    #{}: ({}, {}, {}, {}) {}x{}\n",
                i + 1, left, top, right, bottom, region.width, region.height
            ));
        }

        Ok(result)
    }

    /// Crop the requested bands of a screenshot and save them
    ///
    /// Every requested band is checked before anything is written: the index
    /// must exist and the band must have at least one row.
    pub fn slice(&self, input: &Path, request: &SliceRequest) -> SliceResult<Vec<SavedBand>> {
        let bitmap = Self::load(input)?;
        let layout = self.extractor.locate(&bitmap)?;
        let indices = request.selection.resolve(layout.band_count());

        for &index in &indices {
            if layout.region(index)?.is_empty() {
                return Err(SliceError::EmptyBand { index });
            }
        }
        if indices.is_empty() {
            warn!("No bands detected in {}", input.display());
        }

        let mut saved = Vec::with_capacity(indices.len());
        for index in indices {
            let band = layout.band(&bitmap, index)?;
            let fields = NameFields {
                movie: request.movie.clone(),
                page: request.page,
                review: request.review,
                ..NameFields::for_source(input, index)
            };
            let path = request.template.path_in(&request.output_dir, &fields);
            let outcome = write_utils::save_band(&band, &path, request.policy)?;

            info!("Band {} of {} -> {} ({:?})", index, input.display(), path.display(), outcome);
            self.logger.log(&format!("{} band {} -> {} ({:?})", input.display(), index, path.display(), outcome))?;
            saved.push(SavedBand { index, path, outcome });
        }

        Ok(saved)
    }

    /// Write a copy of the screenshot with the detected layout drawn in red
    pub fn overlay(&self, input: &Path, output: &Path) -> SliceResult<BandLayout> {
        let bitmap = Self::load(input)?;
        let layout = self.extractor.locate(&bitmap)?;

        let drawn = overlay_utils::draw_layout(&bitmap, &layout);
        write_utils::save_band(&drawn, output, SavePolicy::Overwrite)?;
        self.logger.log(&format!("Overlay of {} written to {}", input.display(), output.display()))?;

        Ok(layout)
    }
}
