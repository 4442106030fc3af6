//! Color signatures
//!
//! A signature is a reference RGB triple with a per-channel tolerance.
//! Alpha never takes part in a comparison; callers hand in `Rgb<u8>` pixels.

use std::fmt;
use image::Rgb;

/// Reference color plus the largest per-channel difference still counted as a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSignature {
    /// Reference color
    pub reference: Rgb<u8>,
    /// Maximum absolute difference allowed on each channel (0 = exact)
    pub tolerance: u8,
}

impl ColorSignature {
    /// Create a signature matching only the exact color
    pub fn exact(r: u8, g: u8, b: u8) -> Self {
        ColorSignature { reference: Rgb([r, g, b]), tolerance: 0 }
    }

    /// Create a signature with a per-channel tolerance
    pub fn new(r: u8, g: u8, b: u8, tolerance: u8) -> Self {
        ColorSignature { reference: Rgb([r, g, b]), tolerance }
    }

    /// Same reference color, different tolerance
    pub fn with_tolerance(self, tolerance: u8) -> Self {
        ColorSignature { tolerance, ..self }
    }

    /// Check whether a pixel lies within tolerance on every channel
    pub fn matches(&self, pixel: &Rgb<u8>) -> bool {
        pixel.0
            .iter()
            .zip(self.reference.0.iter())
            .all(|(p, r)| p.abs_diff(*r) <= self.tolerance)
    }
}

impl fmt::Display for ColorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.reference.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)?;
        if self.tolerance > 0 {
            write!(f, " ±{}", self.tolerance)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_signature_rejects_any_difference() {
        let sig = ColorSignature::exact(44, 52, 64);
        assert!(sig.matches(&Rgb([44, 52, 64])));
        assert!(!sig.matches(&Rgb([45, 52, 64])));
        assert!(!sig.matches(&Rgb([44, 52, 63])));
    }

    #[test]
    fn tolerance_is_inclusive_per_channel() {
        let sig = ColorSignature::new(51, 58, 67, 2);
        assert!(sig.matches(&Rgb([53, 56, 69])));
        assert!(sig.matches(&Rgb([49, 60, 65])));
        assert!(!sig.matches(&Rgb([54, 58, 67])));
        assert!(!sig.matches(&Rgb([51, 58, 64])));
    }

    #[test]
    fn tolerance_does_not_wrap_at_channel_limits() {
        let sig = ColorSignature::new(0, 255, 1, 3);
        assert!(sig.matches(&Rgb([3, 252, 0])));
        assert!(!sig.matches(&Rgb([255, 255, 1])));
    }

    #[test]
    fn display_shows_hex_and_tolerance() {
        assert_eq!(ColorSignature::exact(68, 85, 102).to_string(), "#445566");
        assert_eq!(ColorSignature::new(51, 58, 67, 2).to_string(), "#333a43 ±2");
    }
}
