// SPDX-License-Identifier: MIT
//
// The HSL color entity — validated at construction, immutable after.

use std::fmt;

use crate::error::{ValidationError, check_range};

// ─── Component ranges ────────────────────────────────────────────────────────

/// Lowest legal hue angle, in degrees.
pub const HUE_MIN: f32 = 0.0;
/// Highest legal hue angle, in degrees. 360 is legal and distinct from 0
/// for callers that want to preserve a full turn around the wheel.
pub const HUE_MAX: f32 = 360.0;
/// Lowest legal saturation, in percent.
pub const SATURATION_MIN: f32 = 0.0;
/// Highest legal saturation, in percent.
pub const SATURATION_MAX: f32 = 100.0;
/// Lowest legal lightness, in percent.
pub const LIGHTNESS_MIN: f32 = 0.0;
/// Highest legal lightness, in percent.
pub const LIGHTNESS_MAX: f32 = 100.0;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable HSL color.
///
/// Every component is validated before the value is constructed, so an
/// existing `Color` is always legal: hue in [0, 360] degrees, saturation
/// and lightness in [0, 100] percent. The CSS `hsl(h, s%, l%)` string is
/// rendered once at construction and never recomputed.
///
/// # Examples
///
/// ```
/// use tinct_color::Color;
///
/// let teal = Color::new(180.0, 50.0, 40.0)?;
/// assert_eq!(teal.hsl(), "hsl(180, 50%, 40%)");
/// assert_eq!(teal.hue(), 180.0);
/// # Ok::<(), tinct_color::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    hue: f32,
    saturation: f32,
    lightness: f32,
    hsl: String,
}

impl Color {
    /// Create a color from hue (degrees), saturation and lightness (percent).
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any component is NaN, infinite, or
    /// outside its legal range. Nothing is constructed on failure.
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Result<Self, ValidationError> {
        check_range("hue", hue, HUE_MIN, HUE_MAX)?;
        check_range("saturation", saturation, SATURATION_MIN, SATURATION_MAX)?;
        check_range("lightness", lightness, LIGHTNESS_MIN, LIGHTNESS_MAX)?;

        // Integral f32 values render without a decimal point, so colors
        // built from whole numbers produce exact `hsl(h, s%, l%)` strings.
        let hsl = format!("hsl({hue}, {saturation}%, {lightness}%)");

        Ok(Self {
            hue,
            saturation,
            lightness,
            hsl,
        })
    }

    /// Hue angle in degrees, 0.0 to 360.0.
    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Saturation in percent, 0.0 to 100.0.
    #[inline]
    #[must_use]
    pub const fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Lightness in percent, 0.0 to 100.0.
    #[inline]
    #[must_use]
    pub const fn lightness(&self) -> f32 {
        self.lightness
    }

    /// The CSS color string, e.g. `hsl(180, 50%, 40%)`.
    #[inline]
    #[must_use]
    pub fn hsl(&self) -> &str {
        &self.hsl
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hsl)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
