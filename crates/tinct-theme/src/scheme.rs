//! Color-harmony schemes — pure hue math on the color wheel.
//!
//! Each scheme places a fixed number of "main" hues relative to a base hue
//! using a specific increment formula. Everything here is deterministic;
//! randomness (base hue, saturation jitter, contrast hues) lives in
//! [`crate::maker`].

use std::fmt;
use std::ops::RangeInclusive;

/// Degrees in a full turn of the color wheel.
const WHEEL: f32 = 360.0;

/// The rule used to derive related hues from one base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// One hue; the colors vary in lightness from darkest to lightest.
    Monochrome,
    /// Three hues in adjacent 30-degree wheel sections.
    Analogous,
    /// Two hues 180 degrees apart.
    Complementary,
    /// A base hue plus the two neighbors of its complement.
    SplitComplementary,
    /// Three hues 120 degrees apart.
    Triadic,
}

impl Scheme {
    /// Human-readable name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
        }
    }

    /// Parse a scheme from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// All available schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochrome,
            Self::Analogous,
            Self::Complementary,
            Self::SplitComplementary,
            Self::Triadic,
        ]
    }

    /// The closed range of color counts this scheme can produce.
    ///
    /// Multi-hue schemes span their main-color count up to main + 2
    /// (one dark and one light contrast color).
    #[must_use]
    pub const fn color_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Monochrome => 2..=5,
            Self::Complementary => 2..=4,
            Self::Analogous | Self::SplitComplementary | Self::Triadic => 3..=5,
        }
    }

    /// Whether this scheme can produce a theme with `count` colors.
    #[must_use]
    pub fn supports(self, count: usize) -> bool {
        self.color_range().contains(&count)
    }

    /// Number of main hue positions the scheme derives from the base hue.
    ///
    /// Monochrome varies lightness instead of hue and has no main-hue set.
    #[must_use]
    pub const fn main_colors(self) -> usize {
        match self {
            Self::Monochrome => 0,
            Self::Complementary => 2,
            Self::Analogous | Self::SplitComplementary | Self::Triadic => 3,
        }
    }

    /// Hue increment of the `i`th main color, in degrees.
    fn hue_increment(self, i: usize) -> f32 {
        let i = i as f32;
        match self {
            Self::Monochrome => 0.0,
            Self::Analogous => 30.0 * i,
            Self::Complementary => (WHEEL / 2.0) * i,
            Self::Triadic => (WHEEL / 3.0) * i,
            // Empirical polynomial: increments 0, 150, 210 — the base hue,
            // then the two split neighbors of its complement.
            Self::SplitComplementary => 30.0 * (-1.5 * i).mul_add(i, 6.5 * i),
        }
    }

    /// The main hue positions for a theme built on `base_hue`.
    ///
    /// Applies the wheel-wrap rule to every position. Returns an empty
    /// vector for [`Scheme::Monochrome`].
    #[must_use]
    pub fn main_hues(self, base_hue: f32) -> Vec<f32> {
        (0..self.main_colors())
            .map(|i| wrap_hue(base_hue + self.hue_increment(i)))
            .collect()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wrap a hue onto the color wheel.
///
/// Exact multiples of 360 are preserved unreduced: a boundary color keeps
/// hue 360 rather than wrapping to 0, which `Color` accepts as legal.
fn wrap_hue(hue: f32) -> f32 {
    if hue % WHEEL == 0.0 { hue } else { hue % WHEEL }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn complementary_hues_180_apart() {
        assert_eq!(Scheme::Complementary.main_hues(40.0), vec![40.0, 220.0]);
    }

    #[test]
    fn complementary_preserves_full_turn() {
        // 180 + 180 lands exactly on a wheel multiple and stays 360.
        assert_eq!(Scheme::Complementary.main_hues(180.0), vec![180.0, 360.0]);
    }

    #[test]
    fn triadic_hues_evenly_spaced() {
        assert_eq!(
            Scheme::Triadic.main_hues(10.0),
            vec![10.0, 130.0, 250.0]
        );
    }

    #[test]
    fn triadic_wraps_past_360() {
        assert_eq!(
            Scheme::Triadic.main_hues(300.0),
            vec![300.0, 60.0, 180.0]
        );
    }

    #[test]
    fn analogous_hues_30_apart() {
        assert_eq!(
            Scheme::Analogous.main_hues(100.0),
            vec![100.0, 130.0, 160.0]
        );
    }

    #[test]
    fn analogous_preserves_full_turn() {
        assert_eq!(
            Scheme::Analogous.main_hues(330.0),
            vec![330.0, 360.0, 30.0]
        );
    }

    #[test]
    fn split_complementary_positions() {
        // The polynomial places hues at base, base + 150, base + 210.
        assert_eq!(
            Scheme::SplitComplementary.main_hues(20.0),
            vec![20.0, 170.0, 230.0]
        );
    }

    #[test]
    fn split_complementary_wraps() {
        assert_eq!(
            Scheme::SplitComplementary.main_hues(300.0),
            vec![300.0, 90.0, 150.0]
        );
    }

    #[test]
    fn monochrome_has_no_main_hues() {
        assert!(Scheme::Monochrome.main_hues(120.0).is_empty());
    }

    #[test]
    fn color_ranges_match_schemes() {
        assert_eq!(Scheme::Monochrome.color_range(), 2..=5);
        assert_eq!(Scheme::Complementary.color_range(), 2..=4);
        assert_eq!(Scheme::Analogous.color_range(), 3..=5);
        assert_eq!(Scheme::SplitComplementary.color_range(), 3..=5);
        assert_eq!(Scheme::Triadic.color_range(), 3..=5);
    }

    #[test]
    fn supports_matches_range_edges() {
        assert!(Scheme::Complementary.supports(2));
        assert!(Scheme::Complementary.supports(4));
        assert!(!Scheme::Complementary.supports(5));
        assert!(!Scheme::Triadic.supports(2));
        assert!(Scheme::Monochrome.supports(5));
    }

    #[test]
    fn names_round_trip() {
        for &scheme in Scheme::all() {
            assert_eq!(Scheme::from_name(scheme.name()), Some(scheme));
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(
            Scheme::from_name("Split-Complementary"),
            Some(Scheme::SplitComplementary)
        );
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Scheme::from_name("tetradic"), None);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Scheme::Triadic.to_string(), "triadic");
    }

    proptest! {
        /// Main hues always land in the legal [0, 360] component range,
        /// for every integral base hue a seed can draw.
        #[test]
        fn main_hues_stay_legal(base in 0u16..=360) {
            for &scheme in Scheme::all() {
                for hue in scheme.main_hues(f32::from(base)) {
                    prop_assert!((0.0..=360.0).contains(&hue),
                        "{scheme} base {base} produced hue {hue}");
                }
            }
        }

        /// The first main hue of every multi-hue scheme is the base itself.
        #[test]
        fn first_hue_is_base(base in 1u16..=359) {
            for &scheme in Scheme::all() {
                if scheme.main_colors() > 0 {
                    prop_assert_eq!(scheme.main_hues(f32::from(base))[0], f32::from(base));
                }
            }
        }
    }
}
