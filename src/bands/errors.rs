//! Custom error types for band slicing

use std::fmt;
use std::io;

use super::palette::BoundaryRole;

/// Band slicing error types
#[derive(Debug)]
pub enum SliceError {
    /// I/O error
    IoError(io::Error),
    /// Image decode or encode error
    ImageError(image::ImageError),
    /// The vertical scan finished without seeing a required boundary
    BoundaryNotFound(BoundaryRole),
    /// No separator run on the reference row
    ExtentNotFound { row: u32 },
    /// Requested band does not exist
    IndexOutOfRange { index: usize, available: usize },
    /// Two adjacent boundary rows leave a band with no rows
    EmptyBand { index: usize },
    /// A column or row lies outside the bitmap
    OutOfBounds(String),
    /// Named layout profile is unknown
    ProfileNotFound(String),
    /// Invalid profile, manifest or template
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::IoError(e) => write!(f, "I/O error: {}", e),
            SliceError::ImageError(e) => write!(f, "Image error: {}", e),
            SliceError::BoundaryNotFound(role) => write!(f, "No {} boundary found in scan", role),
            SliceError::ExtentNotFound { row } => write!(f, "No separator run found on row {}", row),
            SliceError::IndexOutOfRange { index, available } => {
                write!(f, "Band {} requested but only {} band(s) detected", index, available)
            }
            SliceError::EmptyBand { index } => {
                write!(f, "Band {} has no rows between its boundaries", index)
            }
            SliceError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
            SliceError::ProfileNotFound(name) => write!(f, "Unknown layout profile: {}", name),
            SliceError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SliceError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SliceError::IoError(e) => Some(e),
            SliceError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SliceError {
    fn from(error: io::Error) -> Self {
        SliceError::IoError(error)
    }
}

impl From<image::ImageError> for SliceError {
    fn from(error: image::ImageError) -> Self {
        SliceError::ImageError(error)
    }
}

impl From<toml::de::Error> for SliceError {
    fn from(error: toml::de::Error) -> Self {
        SliceError::ConfigError(format!("Failed to parse TOML: {}", error))
    }
}

impl From<String> for SliceError {
    fn from(msg: String) -> Self {
        SliceError::GenericError(msg)
    }
}

/// Result type for band slicing operations
pub type SliceResult<T> = Result<T, SliceError>;
