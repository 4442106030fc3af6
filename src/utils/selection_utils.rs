//! Band selection parsing
//!
//! Parses the band lists given on the command line (`1,3,5`) and the
//! `page:band` pairs of batch manifests.

use lazy_static::lazy_static;
use regex::Regex;

use crate::bands::errors::{SliceError, SliceResult};

lazy_static! {
    static ref PAGE_BAND: Regex = Regex::new(r"^\s*(\d+)\s*:\s*(\d+)\s*$").unwrap();
}

/// Which bands of a screenshot to save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BandSelection {
    /// Every detected band
    All,
    /// The listed 1-based indices, in the given order
    Indices(Vec<usize>),
}

impl BandSelection {
    /// Parse a comma-separated list of 1-based band indices
    pub fn parse(list: &str) -> SliceResult<Self> {
        let mut indices = Vec::new();
        for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let index = part.parse::<usize>()
                .map_err(|_| SliceError::ConfigError(format!("Invalid band index '{}'", part)))?;
            if index == 0 {
                return Err(SliceError::ConfigError("Band indices start at 1".to_string()));
            }
            if !indices.contains(&index) {
                indices.push(index);
            }
        }

        if indices.is_empty() {
            return Err(SliceError::ConfigError(format!("No band indices in '{}'", list)));
        }
        Ok(BandSelection::Indices(indices))
    }

    /// Concrete indices for a screenshot with `band_count` bands
    pub fn resolve(&self, band_count: usize) -> Vec<usize> {
        match self {
            BandSelection::All => (1..=band_count).collect(),
            BandSelection::Indices(indices) => indices.clone(),
        }
    }
}

/// A `page:band` reference from a batch manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBand {
    pub page: u32,
    pub band: usize,
}

/// Parse `page:band`, e.g. `4:2` is the second review on page 4
pub fn parse_page_band(text: &str) -> SliceResult<PageBand> {
    let caps = PAGE_BAND
        .captures(text)
        .ok_or_else(|| SliceError::ConfigError(format!("Expected 'page:band', found '{}'", text)))?;

    let page = caps[1].parse::<u32>()
        .map_err(|_| SliceError::ConfigError(format!("Page number too large in '{}'", text)))?;
    let band = caps[2].parse::<usize>()
        .map_err(|_| SliceError::ConfigError(format!("Band number too large in '{}'", text)))?;
    if page == 0 || band == 0 {
        return Err(SliceError::ConfigError(format!("Page and band start at 1 in '{}'", text)));
    }

    Ok(PageBand { page, band })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_lists() {
        assert_eq!(BandSelection::parse("1,3, 5").unwrap(), BandSelection::Indices(vec![1, 3, 5]));
        assert_eq!(BandSelection::parse("2,2,1").unwrap(), BandSelection::Indices(vec![2, 1]));
    }

    #[test]
    fn rejects_bad_lists() {
        assert!(BandSelection::parse("").is_err());
        assert!(BandSelection::parse("0").is_err());
        assert!(BandSelection::parse("1,x").is_err());
    }

    #[test]
    fn resolves_all() {
        assert_eq!(BandSelection::All.resolve(3), vec![1, 2, 3]);
        assert_eq!(BandSelection::Indices(vec![4]).resolve(3), vec![4]);
    }

    #[test]
    fn parses_page_band_pairs() {
        assert_eq!(parse_page_band("4:2").unwrap(), PageBand { page: 4, band: 2 });
        assert_eq!(parse_page_band(" 1 : 10 ").unwrap(), PageBand { page: 1, band: 10 });
        assert!(parse_page_band("4-2").is_err());
        assert!(parse_page_band("0:1").is_err());
        assert!(parse_page_band("a:1").is_err());
    }
}
