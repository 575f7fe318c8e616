//! The generated palette — a scheme tag plus its colors, in generation
//! order (main colors first, contrast colors last).

use tinct_color::Color;

use crate::scheme::Scheme;

/// A finished color theme.
///
/// The color sequence is only handed out as a fresh copy, so callers can
/// never mutate a palette through its accessor. Re-sorting happens
/// in place through the `sort_by_*` commands and affects subsequent
/// `colors()` calls only.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    scheme: Scheme,
    colors: Vec<Color>,
}

impl Palette {
    pub(crate) fn new(scheme: Scheme, colors: Vec<Color>) -> Self {
        Self { scheme, colors }
    }

    /// The scheme that generated this palette.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors. Generated palettes never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors, as a fresh copy each call.
    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        self.colors.clone()
    }

    /// Sort the colors by hue, ascending.
    pub fn sort_by_hue(&mut self) {
        self.colors.sort_by(|a, b| a.hue().total_cmp(&b.hue()));
    }

    /// Sort the colors by saturation, ascending.
    pub fn sort_by_saturation(&mut self) {
        self.colors
            .sort_by(|a, b| a.saturation().total_cmp(&b.saturation()));
    }

    /// Sort the colors by lightness, ascending.
    pub fn sort_by_lightness(&mut self) {
        self.colors
            .sort_by(|a, b| a.lightness().total_cmp(&b.lightness()));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
