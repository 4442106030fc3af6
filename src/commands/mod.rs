//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod detect_command;
pub mod slice_command;
pub mod overlay_command;
pub mod batch_command;
pub mod profiles_command;

pub use command_traits::{Command, CommandFactory};
pub use detect_command::DetectCommand;
pub use slice_command::SliceCommand;
pub use overlay_command::OverlayCommand;
pub use batch_command::BatchCommand;
pub use profiles_command::ProfilesCommand;

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::bands::errors::{SliceError, SliceResult};
use crate::bands::{LayoutProfile, ProfileSet, DEFAULT_PROFILE};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct BandslicerCommandFactory;

impl BandslicerCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        BandslicerCommandFactory
    }
}

impl Default for BandslicerCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for BandslicerCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SliceResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("list-profiles") {
            Ok(Box::new(ProfilesCommand::new(args, logger)?))
        } else if args.get_flag("batch") {
            Ok(Box::new(BatchCommand::new(args, logger)?))
        } else if args.get_flag("slice") {
            Ok(Box::new(SliceCommand::new(args, logger)?))
        } else if args.get_flag("overlay") {
            Ok(Box::new(OverlayCommand::new(args, logger)?))
        } else {
            // Default to detect command
            Ok(Box::new(DetectCommand::new(args, logger)?))
        }
    }
}

/// Required positional input path
pub(crate) fn input_path(args: &ArgMatches) -> SliceResult<PathBuf> {
    args.get_one::<String>("input")
        .map(PathBuf::from)
        .ok_or_else(|| SliceError::GenericError("Missing input file".to_string()))
}

/// Built-in profiles plus those of `--profile-file`, if given
pub(crate) fn load_profiles(args: &ArgMatches) -> SliceResult<ProfileSet> {
    let mut profiles = ProfileSet::builtin();
    if let Some(path) = args.get_one::<String>("profile-file") {
        info!("Loading layout profiles from {}", path);
        profiles.merge(ProfileSet::from_file(path)?);
    }
    Ok(profiles)
}

/// Apply `--column` and `--tolerance` overrides to a profile
pub(crate) fn apply_overrides(args: &ArgMatches, mut profile: LayoutProfile) -> SliceResult<LayoutProfile> {
    if let Some(column) = args.get_one::<String>("column") {
        let column = column.parse::<u32>()
            .map_err(|_| SliceError::ConfigError(format!("Invalid column: {}", column)))?;
        info!("Overriding probe column: {}", column);
        profile = profile.with_column(column);
    }
    if let Some(tolerance) = args.get_one::<String>("tolerance") {
        let tolerance = tolerance.parse::<u8>()
            .map_err(|_| SliceError::ConfigError(format!("Invalid tolerance: {}", tolerance)))?;
        info!("Overriding tolerance: {}", tolerance);
        profile = profile.with_tolerance(tolerance);
    }
    Ok(profile)
}

/// Resolve the layout profile selected on the command line
pub(crate) fn resolve_profile(args: &ArgMatches) -> SliceResult<LayoutProfile> {
    let profiles = load_profiles(args)?;
    let name = args.get_one::<String>("profile")
        .map(String::as_str)
        .unwrap_or(DEFAULT_PROFILE);
    info!("Using layout profile '{}'", name);
    apply_overrides(args, profiles.get(name)?)
}
