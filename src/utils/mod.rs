//! Utility modules for common functionality
//!
//! This module provides the logging, progress, parsing, naming and output
//! helpers used around the band detection core.

pub mod logger;
pub mod progress;
pub mod color_utils;
pub mod write_utils;
pub mod naming_utils;
pub mod selection_utils;
pub mod overlay_utils;
