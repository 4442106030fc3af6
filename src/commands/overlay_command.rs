//! Debug overlay command
//!
//! Writes a copy of the screenshot with every detected boundary row and both
//! extent edges drawn in red.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::api::BandSlicer;
use crate::bands::errors::SliceResult;
use crate::bands::LayoutProfile;
use crate::commands::command_traits::Command;
use crate::utils::logger::Logger;

/// Output used when `--output` is not given
pub const DEFAULT_OVERLAY_FILE: &str = "red_lines.png";

/// Command for drawing the detected layout onto a screenshot
pub struct OverlayCommand<'a> {
    input_file: PathBuf,
    output_file: PathBuf,
    profile: LayoutProfile,
    logger: &'a Logger,
}

impl<'a> OverlayCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        let input_file = super::input_path(args)?;
        let output_file = args.get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OVERLAY_FILE));
        let profile = super::resolve_profile(args)?;

        Ok(OverlayCommand {
            input_file,
            output_file,
            profile,
            logger,
        })
    }
}

impl<'a> Command for OverlayCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        info!("Drawing layout of {} to {}", self.input_file.display(), self.output_file.display());

        let slicer = BandSlicer::new(self.profile.clone(), self.logger);
        let layout = slicer.overlay(&self.input_file, &self.output_file)?;

        println!("{} boundary rows, {} bands, extent {}..{} -> {}",
                 layout.boundaries.rows().len(), layout.band_count(),
                 layout.extent.left, layout.extent.right, self.output_file.display());
        Ok(())
    }
}
