//! Palettes of boundary signatures
//!
//! A palette names the colors one page layout paints at the reference column:
//! an optional gate above the content area, the top of the first band, any
//! number of separators, and the bottom of the last band.

use std::fmt;
use image::Rgb;

use super::color::ColorSignature;

/// Role a row plays once it matches a palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRole {
    /// Marker that enables classification (very-start)
    Gate,
    /// Top of the first band
    Start,
    /// Separator between two bands
    Between,
    /// Bottom of the last band
    End,
}

impl fmt::Display for BoundaryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryRole::Gate => "gate",
            BoundaryRole::Start => "start",
            BoundaryRole::Between => "between",
            BoundaryRole::End => "end",
        };
        f.write_str(name)
    }
}

/// Ordered set of signatures used by one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Must match once before anything else is classified
    pub gate: Option<ColorSignature>,
    pub start: ColorSignature,
    /// Separator variants, tried in order
    pub between: Vec<ColorSignature>,
    pub end: ColorSignature,
}

impl Palette {
    /// Create a palette without a gate
    pub fn new(start: ColorSignature, between: Vec<ColorSignature>, end: ColorSignature) -> Self {
        Palette { gate: None, start, between, end }
    }

    /// Add a gate signature
    pub fn with_gate(mut self, gate: ColorSignature) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Replace the tolerance of every signature, gate included
    pub fn with_tolerance(self, tolerance: u8) -> Self {
        Palette {
            gate: self.gate.map(|g| g.with_tolerance(tolerance)),
            start: self.start.with_tolerance(tolerance),
            between: self.between.into_iter().map(|s| s.with_tolerance(tolerance)).collect(),
            end: self.end.with_tolerance(tolerance),
        }
    }

    /// Classify a pixel as start, between or end, in that priority
    ///
    /// The gate is not considered here; the scanner tracks it separately.
    pub fn classify(&self, pixel: &Rgb<u8>) -> Option<BoundaryRole> {
        if self.start.matches(pixel) {
            Some(BoundaryRole::Start)
        } else if self.is_between(pixel) {
            Some(BoundaryRole::Between)
        } else if self.end.matches(pixel) {
            Some(BoundaryRole::End)
        } else {
            None
        }
    }

    /// Check whether a pixel matches any separator variant
    pub fn is_between(&self, pixel: &Rgb<u8>) -> bool {
        self.between.iter().any(|sig| sig.matches(pixel))
    }

    /// Check whether a pixel matches the gate, if one is defined
    pub fn is_gate(&self, pixel: &Rgb<u8>) -> bool {
        self.gate.map_or(false, |g| g.matches(pixel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::new(
            ColorSignature::exact(68, 85, 102),
            vec![ColorSignature::exact(44, 52, 64)],
            ColorSignature::exact(51, 68, 85),
        )
    }

    #[test]
    fn classify_by_role() {
        let p = palette();
        assert_eq!(p.classify(&Rgb([68, 85, 102])), Some(BoundaryRole::Start));
        assert_eq!(p.classify(&Rgb([44, 52, 64])), Some(BoundaryRole::Between));
        assert_eq!(p.classify(&Rgb([51, 68, 85])), Some(BoundaryRole::End));
        assert_eq!(p.classify(&Rgb([255, 255, 255])), None);
    }

    #[test]
    fn start_wins_over_overlapping_end() {
        let p = Palette::new(
            ColorSignature::new(50, 50, 50, 3),
            vec![],
            ColorSignature::new(52, 52, 52, 3),
        );
        assert_eq!(p.classify(&Rgb([51, 51, 51])), Some(BoundaryRole::Start));
        assert_eq!(p.classify(&Rgb([55, 55, 55])), Some(BoundaryRole::End));
    }

    #[test]
    fn with_tolerance_applies_to_every_signature() {
        let p = palette().with_gate(ColorSignature::exact(1, 2, 3)).with_tolerance(2);
        assert_eq!(p.gate.map(|g| g.tolerance), Some(2));
        assert_eq!(p.start.tolerance, 2);
        assert!(p.between.iter().all(|s| s.tolerance == 2));
        assert_eq!(p.end.tolerance, 2);
        assert!(p.is_gate(&Rgb([3, 4, 5])));
    }

    #[test]
    fn no_gate_never_matches() {
        assert!(!palette().is_gate(&Rgb([0, 0, 0])));
    }
}
