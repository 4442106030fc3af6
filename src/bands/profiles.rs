//! Layout profiles
//!
//! Each rendering of the review page needs its own palette, probe column and
//! extent rule. Profiles are described in TOML; a built-in table ships with
//! the crate and users can add or override entries with their own file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use lazy_static::lazy_static;

use crate::utils::color_utils::color_from_toml;
use super::color::ColorSignature;
use super::errors::{SliceError, SliceResult};
use super::extent::DEFAULT_MARGIN;
use super::palette::Palette;
use super::scanner::BoundaryScanner;

/// Profile used when none is named
pub const DEFAULT_PROFILE: &str = "activity-v2";

lazy_static! {
    static ref BUILTIN_PROFILES: ProfileSet = {
        let content = include_str!("../../profiles.toml");
        ProfileSet::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in layout profiles: {}", e);
            ProfileSet::default()
        })
    };
}

/// Which row the automatic extent scan probes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentReference {
    /// Topmost boundary row
    FirstBoundary,
    /// Topmost separator row, falling back to the topmost boundary
    FirstSeparator,
}

/// How the left/right crop bounds are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentRule {
    /// Scan a reference row for the separator run and widen it
    Auto { margin: u32, reference: ExtentReference },
    /// Constant offsets from both edges
    Fixed { left: u32, right_inset: u32 },
}

/// Complete scan configuration for one page layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutProfile {
    pub name: String,
    /// Column probed by the vertical scan
    pub column: u32,
    /// Tolerance already applied to every palette signature
    pub tolerance: u8,
    pub skip_after_match: u32,
    pub palette: Palette,
    pub extent: ExtentRule,
}

impl LayoutProfile {
    /// Scanner configured with this profile's column and skip
    pub fn scanner(&self) -> BoundaryScanner {
        BoundaryScanner::new(self.column).with_skip_after_match(self.skip_after_match)
    }

    /// Override the probe column
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = column;
        self
    }

    /// Override the tolerance of every signature
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self.palette = self.palette.with_tolerance(tolerance);
        self
    }

    /// Parse a single `[profiles.<name>]` table
    fn from_table(name: &str, table: &toml::value::Table) -> SliceResult<Self> {
        let column = read_u32(table, name, "column")?
            .ok_or_else(|| missing(name, "column"))?;
        let tolerance = match read_u32(table, name, "tolerance")? {
            Some(t) => u8::try_from(t)
                .map_err(|_| SliceError::ConfigError(format!("profile '{}': tolerance {} too large", name, t)))?,
            None => 0,
        };
        let skip_after_match = read_u32(table, name, "skip_after_match")?.unwrap_or(0);

        let signature = |key: &str| -> SliceResult<ColorSignature> {
            let value = table.get(key).ok_or_else(|| missing(name, key))?;
            let rgb = color_from_toml(value)
                .map_err(|e| SliceError::ConfigError(format!("profile '{}', {}: {}", name, key, e)))?;
            Ok(ColorSignature { reference: rgb, tolerance })
        };

        let start = signature("start")?;
        let end = signature("end")?;
        let gate = if table.contains_key("gate") { Some(signature("gate")?) } else { None };

        let between = match table.get("between") {
            None => Vec::new(),
            Some(toml::Value::Array(items)) if items.iter().all(|v| v.is_array() || v.is_str()) => {
                items.iter()
                    .map(|v| color_from_toml(v).map(|rgb| ColorSignature { reference: rgb, tolerance }))
                    .collect::<SliceResult<Vec<_>>>()
                    .map_err(|e| SliceError::ConfigError(format!("profile '{}', between: {}", name, e)))?
            }
            // A single color written without the outer list
            Some(single) => vec![ColorSignature { reference: color_from_toml(single)?, tolerance }],
        };

        let extent = match table.get("extent") {
            None => ExtentRule::Auto { margin: DEFAULT_MARGIN, reference: ExtentReference::FirstBoundary },
            Some(toml::Value::Table(rule)) => Self::parse_extent(name, rule)?,
            Some(other) => {
                return Err(SliceError::ConfigError(format!(
                    "profile '{}': extent must be a table, found {}", name, other
                )))
            }
        };

        Ok(LayoutProfile {
            name: name.to_string(),
            column,
            tolerance,
            skip_after_match,
            palette: Palette { gate, start, between, end },
            extent,
        })
    }

    fn parse_extent(name: &str, rule: &toml::value::Table) -> SliceResult<ExtentRule> {
        let mode = rule.get("mode").and_then(|v| v.as_str()).unwrap_or("auto");
        match mode {
            "auto" => {
                let margin = read_u32(rule, name, "margin")?.unwrap_or(DEFAULT_MARGIN);
                let reference = match rule.get("reference").and_then(|v| v.as_str()) {
                    None | Some("first-boundary") => ExtentReference::FirstBoundary,
                    Some("first-separator") => ExtentReference::FirstSeparator,
                    Some(other) => {
                        return Err(SliceError::ConfigError(format!(
                            "profile '{}': unknown extent reference '{}'", name, other
                        )))
                    }
                };
                Ok(ExtentRule::Auto { margin, reference })
            }
            "fixed" => {
                let left = read_u32(rule, name, "left")?.ok_or_else(|| missing(name, "extent.left"))?;
                let right_inset = read_u32(rule, name, "right_inset")?.unwrap_or(0);
                Ok(ExtentRule::Fixed { left, right_inset })
            }
            other => Err(SliceError::ConfigError(format!(
                "profile '{}': unknown extent mode '{}'", name, other
            ))),
        }
    }
}

/// Named collection of layout profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    profiles: BTreeMap<String, LayoutProfile>,
}

impl ProfileSet {
    /// Parse profiles from a TOML string
    pub fn from_str(content: &str) -> SliceResult<Self> {
        let toml_value: toml::Value = content.parse()?;

        let mut set = ProfileSet::default();
        if let Some(table) = toml_value.get("profiles").and_then(|v| v.as_table()) {
            for (name, value) in table {
                let profile_table = value.as_table().ok_or_else(|| {
                    SliceError::ConfigError(format!("profile '{}' must be a table", name))
                })?;
                set.insert(LayoutProfile::from_table(name, profile_table)?);
            }
        }

        Ok(set)
    }

    /// Load profiles from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> SliceResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// The profiles compiled into the crate
    pub fn builtin() -> Self {
        BUILTIN_PROFILES.clone()
    }

    pub fn insert(&mut self, profile: LayoutProfile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Add every profile of `other`, replacing same-named entries
    pub fn merge(&mut self, other: ProfileSet) {
        self.profiles.extend(other.profiles);
    }

    /// Look up a profile by name
    pub fn get(&self, name: &str) -> SliceResult<LayoutProfile> {
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| SliceError::ProfileNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Look up a built-in profile by name
pub fn builtin_profile(name: &str) -> SliceResult<LayoutProfile> {
    BUILTIN_PROFILES.get(name)
}

fn read_u32(table: &toml::value::Table, profile: &str, key: &str) -> SliceResult<Option<u32>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v.as_integer()
            .and_then(|i| u32::try_from(i).ok())
            .map(Some)
            .ok_or_else(|| SliceError::ConfigError(format!(
                "profile '{}': {} must be a non-negative integer", profile, key
            ))),
    }
}

fn missing(profile: &str, key: &str) -> SliceError {
    SliceError::ConfigError(format!("profile '{}' is missing '{}'", profile, key))
}
