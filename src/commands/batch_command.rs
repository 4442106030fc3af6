//! Batch slicing command
//!
//! Runs every `page:band` entry of a manifest through the slicer, one page
//! at a time, with a progress bar.

use std::path::PathBuf;
use clap::ArgMatches;
use log::{info, warn};

use crate::api::BandSlicer;
use crate::bands::errors::{SliceError, SliceResult};
use crate::bands::{ProfileSet, DEFAULT_PROFILE};
use crate::batch::{run_batch, BatchManifest};
use crate::commands::command_traits::Command;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for processing a batch manifest
pub struct BatchCommand<'a> {
    /// Path to the manifest
    manifest_file: PathBuf,
    /// Parsed manifest
    manifest: BatchManifest,
    /// Profiles available to the manifest
    profiles: ProfileSet,
    /// Profile named on the command line, used when the manifest names none
    cli_profile: Option<String>,
    /// Original arguments, for column and tolerance overrides
    args: ArgMatches,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BatchCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        let manifest_file = super::input_path(args)?;
        info!("Reading batch manifest {}", manifest_file.display());
        let manifest = BatchManifest::from_file(&manifest_file)?;

        let mut profiles = super::load_profiles(args)?;
        if let Some(path) = &manifest.profile_file {
            info!("Loading layout profiles from {}", path.display());
            profiles.merge(ProfileSet::from_file(path)?);
        }

        Ok(BatchCommand {
            manifest_file,
            manifest,
            profiles,
            cli_profile: args.get_one::<String>("profile").cloned(),
            args: args.clone(),
            logger,
        })
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        let name = self.manifest.profile.as_deref()
            .or(self.cli_profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE);
        let profile = super::apply_overrides(&self.args, self.profiles.get(name)?)?;
        info!("Batch {} with profile '{}': {} entries",
              self.manifest_file.display(), name, self.manifest.entry_count());

        let slicer = BandSlicer::new(profile, self.logger);
        let progress = ProgressTracker::new(self.manifest.entry_count() as u64, "Slicing");
        let report = run_batch(&slicer, &self.manifest, &progress);

        self.logger.log(&format!("Batch report: {:?}", report))?;
        println!("{} written, {} skipped, {} failed, {} invalid",
                 report.written, report.skipped, report.failed, report.invalid);

        if report.is_success() {
            Ok(())
        } else {
            warn!("Batch finished with problems");
            Err(SliceError::GenericError(format!(
                "{} of {} entries failed", report.failed + report.invalid, self.manifest.entry_count()
            )))
        }
    }
}
