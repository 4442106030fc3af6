//! Output file naming
//!
//! Band files are named from a template with `{placeholder}` fields, e.g.
//! `{movie}/review_{review}_p{page}_r{band}.png`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::bands::errors::{SliceError, SliceResult};

/// Template used when none is given
pub const DEFAULT_TEMPLATE: &str = "{stem}_r{band}.png";

/// Fields a template may reference
pub const PLACEHOLDERS: [&str; 5] = ["movie", "page", "review", "band", "stem"];

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([A-Za-z_]+)\}").unwrap();
}

/// Validated output name template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    pattern: String,
}

impl NameTemplate {
    /// Parse a template, rejecting unknown placeholders
    pub fn parse(pattern: &str) -> SliceResult<Self> {
        for caps in PLACEHOLDER.captures_iter(pattern) {
            let field = &caps[1];
            if !PLACEHOLDERS.contains(&field) {
                return Err(SliceError::ConfigError(format!(
                    "Unknown placeholder '{{{}}}' in name template '{}'", field, pattern
                )));
            }
        }
        Ok(NameTemplate { pattern: pattern.to_string() })
    }

    /// Fill in the placeholders; fields without a value render empty
    pub fn render(&self, fields: &NameFields) -> String {
        let values = fields.as_map();
        PLACEHOLDER
            .replace_all(&self.pattern, |caps: &Captures| {
                values.get(&caps[1]).cloned().unwrap_or_default()
            })
            .into_owned()
    }

    /// Render and join onto an output directory
    pub fn path_in(&self, output_dir: &Path, fields: &NameFields) -> PathBuf {
        output_dir.join(self.render(fields))
    }
}

impl Default for NameTemplate {
    fn default() -> Self {
        NameTemplate { pattern: DEFAULT_TEMPLATE.to_string() }
    }
}

/// Values available to a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFields {
    pub movie: Option<String>,
    pub page: Option<u32>,
    pub review: Option<u32>,
    pub band: usize,
    /// File stem of the source screenshot
    pub stem: String,
}

impl NameFields {
    pub fn for_source(source: &Path, band: usize) -> Self {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "band".to_string());
        NameFields { stem, band, ..Default::default() }
    }

    fn as_map(&self) -> HashMap<&'static str, String> {
        let mut map = HashMap::new();
        map.insert("band", self.band.to_string());
        map.insert("stem", self.stem.clone());
        if let Some(movie) = &self.movie {
            map.insert("movie", movie.clone());
        }
        if let Some(page) = self.page {
            map.insert("page", page.to_string());
        }
        if let Some(review) = self.review {
            map.insert("review", review.to_string());
        }
        map
    }
}
