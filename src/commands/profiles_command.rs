//! Profile listing command

use clap::ArgMatches;

use crate::bands::errors::SliceResult;
use crate::bands::{ExtentRule, ProfileSet, DEFAULT_PROFILE};
use crate::commands::command_traits::Command;
use crate::utils::logger::Logger;

/// Command for listing the available layout profiles
pub struct ProfilesCommand<'a> {
    profiles: ProfileSet,
    logger: &'a Logger,
}

impl<'a> ProfilesCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        Ok(ProfilesCommand {
            profiles: super::load_profiles(args)?,
            logger,
        })
    }
}

impl<'a> Command for ProfilesCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        for name in self.profiles.names() {
            let profile = self.profiles.get(name)?;
            let marker = if name == DEFAULT_PROFILE { " (default)" } else { "" };
            let extent = match profile.extent {
                ExtentRule::Auto { margin, reference } => format!("auto ±{} from {:?}", margin, reference),
                ExtentRule::Fixed { left, right_inset } => format!("fixed {}..width-{}", left, right_inset),
            };
            println!("{}{}: column {}, tolerance {}, {} separator(s), extent {}",
                     name, marker, profile.column, profile.tolerance,
                     profile.palette.between.len(), extent);
        }

        self.logger.log(&format!("Listed {} profile(s)", self.profiles.len()))?;
        Ok(())
    }
}
