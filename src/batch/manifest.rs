//! Batch manifest parsing
//!
//! A manifest lists, per movie, the `page:band` references of the reviews
//! to cut out. Valid entries are numbered as reviews in list order, and
//! movies run in the order the manifest lists them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bands::errors::{SliceError, SliceResult};
use crate::utils::naming_utils::NameTemplate;
use crate::utils::write_utils::SavePolicy;

/// Template used when the manifest names none
pub const DEFAULT_BATCH_TEMPLATE: &str = "{movie}/review_{review}_p{page}_r{band}.png";

/// One movie and its raw `page:band` entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieEntry {
    pub movie: String,
    pub entries: Vec<String>,
}

/// Parsed batch manifest with paths resolved against its directory
#[derive(Debug, Clone)]
pub struct BatchManifest {
    /// Profile name overriding the command-line choice
    pub profile: Option<String>,
    /// Extra profile file to load
    pub profile_file: Option<PathBuf>,
    /// Screenshots live at `{pages_dir}/{movie}/page{page}.png`
    pub pages_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template: NameTemplate,
    pub policy: SavePolicy,
    pub movies: Vec<MovieEntry>,
}

impl BatchManifest {
    /// Parse a manifest; relative paths are resolved against `base_dir`
    pub fn from_str(content: &str, base_dir: &Path) -> SliceResult<Self> {
        let toml_value: toml::Value = content.parse()?;

        let text = |key: &str| -> SliceResult<Option<String>> {
            match toml_value.get(key) {
                None => Ok(None),
                Some(toml::Value::String(s)) => Ok(Some(s.clone())),
                Some(other) => Err(SliceError::ConfigError(format!(
                    "manifest key '{}' must be a string, found {}", key, other
                ))),
            }
        };

        let profile = text("profile")?;
        let profile_file = text("profile_file")?.map(|p| resolve_path(base_dir, &p));
        let pages_dir = resolve_path(base_dir, &text("pages_dir")?.unwrap_or_else(|| "pages".to_string()));
        let output_dir = resolve_path(base_dir, &text("output_dir")?.unwrap_or_else(|| "images".to_string()));
        let template = NameTemplate::parse(
            &text("name_template")?.unwrap_or_else(|| DEFAULT_BATCH_TEMPLATE.to_string()),
        )?;

        let overwrite = match toml_value.get("overwrite") {
            None => false,
            Some(v) => v.as_bool().ok_or_else(|| {
                SliceError::ConfigError("manifest key 'overwrite' must be a boolean".to_string())
            })?,
        };

        let mut movies = Vec::new();
        if let Some(table) = toml_value.get("movies").and_then(|v| v.as_table()) {
            for (movie, value) in table {
                let items = value.as_array().ok_or_else(|| {
                    SliceError::ConfigError(format!("movie '{}' must list 'page:band' strings", movie))
                })?;
                let entries = items
                    .iter()
                    .map(|item| match item {
                        toml::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                movies.push(MovieEntry { movie: movie.clone(), entries });
            }
        }

        if movies.is_empty() {
            return Err(SliceError::ConfigError("manifest has no [movies] entries".to_string()));
        }

        Ok(BatchManifest {
            profile,
            profile_file,
            pages_dir,
            output_dir,
            template,
            policy: SavePolicy::from_overwrite(overwrite),
            movies,
        })
    }

    /// Load a manifest file
    pub fn from_file(path: &Path) -> SliceResult<Self> {
        let contents = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_str(&contents, base_dir)
    }

    /// Screenshot path of one page of a movie
    pub fn page_path(&self, movie: &str, page: u32) -> PathBuf {
        self.pages_dir.join(movie).join(format!("page{}.png", page))
    }

    /// Total number of entries over all movies
    pub fn entry_count(&self) -> usize {
        self.movies.iter().map(|m| m.entries.len()).sum()
    }
}

/// Resolve a potentially relative path against a base directory.
fn resolve_path(base_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let manifest = BatchManifest::from_str(
            r#"
            profile = "activity-v1"
            pages_dir = "shots"
            output_dir = "/tmp/out"
            overwrite = true
            name_template = "{movie}_{review}.png"

            [movies]
            john-wick = ["1:10", "2:10", "4:2"]
            500-days-of-summer = ["4:7"]
            "#,
            Path::new("/work"),
        )
        .unwrap();

        assert_eq!(manifest.profile.as_deref(), Some("activity-v1"));
        assert_eq!(manifest.pages_dir, Path::new("/work/shots"));
        assert_eq!(manifest.output_dir, Path::new("/tmp/out"));
        assert_eq!(manifest.policy, SavePolicy::Overwrite);
        assert_eq!(manifest.entry_count(), 4);
        assert_eq!(
            manifest.page_path("john-wick", 2),
            Path::new("/work/shots/john-wick/page2.png")
        );
        let wick = manifest.movies.iter().find(|m| m.movie == "john-wick").unwrap();
        assert_eq!(wick.entries, vec!["1:10", "2:10", "4:2"]);
    }

    #[test]
    fn movies_keep_manifest_order() {
        let manifest = BatchManifest::from_str(
            "[movies]\nzootopia = [\"1:1\"]\nbarbie = [\"2:1\"]\nmatrix = [\"3:1\"]\n",
            Path::new("."),
        )
        .unwrap();
        let order: Vec<&str> = manifest.movies.iter().map(|m| m.movie.as_str()).collect();
        assert_eq!(order, vec!["zootopia", "barbie", "matrix"]);
    }

    #[test]
    fn defaults_apply() {
        let manifest = BatchManifest::from_str("[movies]\nbarbie = [\"1:1\"]\n", Path::new("base")).unwrap();
        assert!(manifest.profile.is_none());
        assert_eq!(manifest.pages_dir, Path::new("base/pages"));
        assert_eq!(manifest.output_dir, Path::new("base/images"));
        assert_eq!(manifest.policy, SavePolicy::SkipIfExists);
        assert_eq!(manifest.template, NameTemplate::parse(DEFAULT_BATCH_TEMPLATE).unwrap());
    }

    #[test]
    fn non_string_entries_are_kept_for_validation() {
        let manifest = BatchManifest::from_str("[movies]\nbarbie = [\"1:1\", 7]\n", Path::new(".")).unwrap();
        assert_eq!(manifest.movies[0].entries, vec!["1:1", "7"]);
    }

    #[test]
    fn rejects_bad_manifests() {
        assert!(BatchManifest::from_str("profile = \"x\"\n", Path::new(".")).is_err());
        assert!(BatchManifest::from_str("overwrite = 1\n[movies]\na = [\"1:1\"]\n", Path::new(".")).is_err());
        assert!(BatchManifest::from_str("[movies]\na = \"1:1\"\n", Path::new(".")).is_err());
        assert!(BatchManifest::from_str(
            "name_template = \"{title}.png\"\n[movies]\na = [\"1:1\"]\n",
            Path::new(".")
        )
        .is_err());
    }
}
