//! Band layout detection command
//!
//! This module implements the default command: scan a screenshot and report
//! its boundary rows, extent and band rectangles without writing any image.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::api::BandSlicer;
use crate::bands::errors::SliceResult;
use crate::bands::LayoutProfile;
use crate::commands::command_traits::Command;
use crate::utils::logger::Logger;

/// Command for reporting the band layout of a screenshot
pub struct DetectCommand<'a> {
    /// Path to the input screenshot
    input_file: PathBuf,
    /// Layout profile to scan with
    profile: LayoutProfile,
    /// Whether to print the palette as well
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DetectCommand<'a> {
    /// Create a new detect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DetectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        let input_file = super::input_path(args)?;
        let profile = super::resolve_profile(args)?;
        let verbose = args.get_flag("verbose");

        Ok(DetectCommand {
            input_file,
            profile,
            verbose,
            logger,
        })
    }

    /// Print the signatures the scan will look for
    fn display_profile(&self) {
        let palette = &self.profile.palette;
        println!("Profile '{}': column {}, tolerance {}, skip {}",
                 self.profile.name, self.profile.column, self.profile.tolerance,
                 self.profile.skip_after_match);
        if let Some(gate) = palette.gate {
            println!("  gate:    {}", gate);
        }
        println!("  start:   {}", palette.start);
        for sig in &palette.between {
            println!("  between: {}", sig);
        }
        println!("  end:     {}", palette.end);
        println!("  extent:  {:?}", self.profile.extent);
    }
}

impl<'a> Command for DetectCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        info!("Detecting band layout of {}", self.input_file.display());

        if self.verbose {
            self.display_profile();
        }

        let slicer = BandSlicer::new(self.profile.clone(), self.logger);
        let summary = slicer.describe(&self.input_file)?;
        print!("{}", summary);

        Ok(())
    }
}
