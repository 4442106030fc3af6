//! Color parsing utilities
//!
//! Parses the color notations accepted in profile files and on the command
//! line: `#rrggbb`, `#rgb`, and decimal triples such as `51,58,67` or
//! `(51, 58, 67)`.

use image::Rgb;
use lazy_static::lazy_static;
use regex::Regex;

use crate::bands::errors::{SliceError, SliceResult};

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").unwrap();
    static ref DECIMAL_COLOR: Regex =
        Regex::new(r"^\(?\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)?$").unwrap();
}

/// Parse a color string into an RGB triple
///
/// # Arguments
/// * `text` - Color in hex (`#445566`, `#456`) or decimal (`68,85,102`) form
///
/// # Returns
/// The parsed color or a `ConfigError`
pub fn parse_color(text: &str) -> SliceResult<Rgb<u8>> {
    let text = text.trim();

    if let Some(caps) = DECIMAL_COLOR.captures(text) {
        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = caps[i + 1].parse::<u8>()
                .map_err(|_| SliceError::ConfigError(format!("Channel out of range in color '{}'", text)))?;
        }
        return Ok(Rgb(channels));
    }

    if let Some(caps) = HEX_COLOR.captures(text) {
        let digits = &caps[1];
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };
        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16)
                .map_err(|_| SliceError::ConfigError(format!("Invalid hex color '{}'", text)))?;
        }
        return Ok(Rgb(channels));
    }

    Err(SliceError::ConfigError(format!("Unrecognized color '{}'", text)))
}

/// Parse a color from a TOML value: a string or an array of three integers
pub fn color_from_toml(value: &toml::Value) -> SliceResult<Rgb<u8>> {
    match value {
        toml::Value::String(s) => parse_color(s),
        toml::Value::Array(items) if items.len() == 3 => {
            let mut channels = [0u8; 3];
            for (channel, item) in channels.iter_mut().zip(items) {
                *channel = item.as_integer()
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(|| SliceError::ConfigError(format!("Invalid color channel: {}", item)))?;
            }
            Ok(Rgb(channels))
        }
        other => Err(SliceError::ConfigError(format!("Expected a color, found: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(parse_color("#445566").unwrap(), Rgb([68, 85, 102]));
        assert_eq!(parse_color("2C3440").unwrap(), Rgb([44, 52, 64]));
        assert_eq!(parse_color("#abc").unwrap(), Rgb([0xaa, 0xbb, 0xcc]));
    }

    #[test]
    fn parses_decimal_forms() {
        assert_eq!(parse_color("51,58,67").unwrap(), Rgb([51, 58, 67]));
        assert_eq!(parse_color(" (53, 60, 70) ").unwrap(), Rgb([53, 60, 70]));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(parse_color("256,0,0").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn reads_toml_arrays_and_strings() {
        let doc: toml::Value = "a = [39, 46, 54]\nb = \"#334455\"\nc = [1, 2]\nd = [1, 2, 300]"
            .parse()
            .unwrap();
        assert_eq!(color_from_toml(&doc["a"]).unwrap(), Rgb([39, 46, 54]));
        assert_eq!(color_from_toml(&doc["b"]).unwrap(), Rgb([51, 68, 85]));
        assert!(color_from_toml(&doc["c"]).is_err());
        assert!(color_from_toml(&doc["d"]).is_err());
    }
}
