//! Band slicing command
//!
//! This module implements the command that crops one, several or all bands
//! out of a screenshot and saves them under a name template.

use std::path::PathBuf;
use clap::ArgMatches;
use log::{info, error};

use crate::api::{BandSlicer, SliceRequest};
use crate::bands::errors::{SliceError, SliceResult};
use crate::bands::LayoutProfile;
use crate::commands::command_traits::Command;
use crate::utils::logger::Logger;
use crate::utils::naming_utils::NameTemplate;
use crate::utils::selection_utils::BandSelection;
use crate::utils::write_utils::{SaveOutcome, SavePolicy};

/// Command for cropping bands out of a screenshot
pub struct SliceCommand<'a> {
    /// Path to the input screenshot
    input_file: PathBuf,
    /// Layout profile to scan with
    profile: LayoutProfile,
    /// Output location and naming
    request: SliceRequest,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SliceCommand<'a> {
    /// Create a new slice command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new SliceCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        let input_file = super::input_path(args)?;
        info!("Input file: {}", input_file.display());

        let profile = super::resolve_profile(args)?;

        let selection = if args.get_flag("all") {
            BandSelection::All
        } else if let Some(list) = args.get_one::<String>("bands") {
            BandSelection::parse(list)?
        } else {
            return Err(SliceError::GenericError(
                "Missing band selection. Use --bands or --all".to_string()
            ));
        };
        info!("Band selection: {:?}", selection);

        let output_dir = args.get_one::<String>("output-dir")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let template = match args.get_one::<String>("name-template") {
            Some(pattern) => NameTemplate::parse(pattern)?,
            None => NameTemplate::default(),
        };

        let page = parse_number(args, "page")?;
        let review = parse_number(args, "review")?;
        let movie = args.get_one::<String>("movie").cloned();
        let policy = SavePolicy::from_overwrite(args.get_flag("overwrite"));
        info!("Output directory: {}, policy: {:?}", output_dir.display(), policy);

        Ok(SliceCommand {
            input_file,
            profile,
            request: SliceRequest {
                selection,
                output_dir,
                template,
                movie,
                page,
                review,
                policy,
            },
            logger,
        })
    }
}

fn parse_number(args: &ArgMatches, name: &str) -> SliceResult<Option<u32>> {
    args.get_one::<String>(name)
        .map(|v| v.parse::<u32>()
            .map_err(|_| SliceError::GenericError(format!("Invalid --{} value: {}", name, v))))
        .transpose()
}

impl<'a> Command for SliceCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        info!("Slicing {} with profile '{}'", self.input_file.display(), self.profile.name);

        let slicer = BandSlicer::new(self.profile.clone(), self.logger);
        let saved = match slicer.slice(&self.input_file, &self.request) {
            Ok(saved) => saved,
            Err(e) => {
                error!("Failed to slice {}: {}", self.input_file.display(), e);
                return Err(e);
            }
        };

        for band in &saved {
            let status = match band.outcome {
                SaveOutcome::Written => "written",
                SaveOutcome::Skipped => "exists, skipped",
            };
            println!("band {} -> {} ({})", band.index, band.path.display(), status);
        }

        self.logger.log(&format!("Sliced {} band(s) from {}", saved.len(), self.input_file.display()))?;
        Ok(())
    }
}
