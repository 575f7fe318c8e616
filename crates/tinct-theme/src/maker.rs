//! Theme assembly — from seeded base state to a finished palette.
//!
//! A [`ThemeMaker`] owns a scheme and an rng. Every `generate` call draws
//! one fresh base hue and saturation that all colors in the theme share
//! (each color re-jitters the saturation slightly), then hands hue
//! placement to the scheme and appends contrast colors for counts beyond
//! the scheme's main set.

use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tinct_color::Color;

use crate::error::{Result, ThemeError};
use crate::palette::Palette;
use crate::rng;
use crate::scheme::Scheme;

// ── Seed ranges ──────────────────────────────────────────────────────────
//
// Hue spans the whole wheel. Saturation stays off both extremes, keeping
// the ±10 jitter window inside legal bounds. Main-color lightness avoids
// the extremes reserved for contrast colors.

const HUE_MIN: i32 = 0;
const HUE_MAX: i32 = 360;
const SATURATION_MIN: i32 = 30;
const SATURATION_MAX: i32 = 90;
const LIGHTNESS_MIN: i32 = 20;
const LIGHTNESS_MAX: i32 = 80;

/// Lightness of every dark contrast color and of the darkest monochrome step.
const MIN_LIGHTNESS: f32 = 20.0;
/// Lightness of every light contrast color and of the lightest monochrome step.
const MAX_LIGHTNESS: f32 = 80.0;
/// A main lightness above this picks a dark contrast color, at or below it
/// a light one — whichever sits farther from the theme's own lightness.
const CONTRAST_MIDPOINT: f32 = 50.0;

/// Base state shared by every color in one generated theme.
///
/// Drawn fresh per `generate` call: one maker instance produces
/// independent themes on repeated calls.
struct Seed {
    hue: f32,
    saturation: f32,
    lightness: f32,
}

impl Seed {
    fn draw<R: Rng>(rng: &mut R) -> Self {
        Self {
            hue: rng::uniform(rng, HUE_MIN, HUE_MAX),
            saturation: rng::uniform(rng, SATURATION_MIN, SATURATION_MAX),
            lightness: rng::uniform(rng, LIGHTNESS_MIN, LIGHTNESS_MAX),
        }
    }
}

/// Generates color themes for one scheme.
///
/// # Examples
///
/// ```
/// use tinct_theme::{Scheme, ThemeMaker};
///
/// let mut maker = ThemeMaker::seeded(Scheme::Triadic, 42);
/// let palette = maker.generate(3)?;
/// assert_eq!(palette.len(), 3);
/// # Ok::<(), tinct_theme::ThemeError>(())
/// ```
#[derive(Debug)]
pub struct ThemeMaker<R = StdRng> {
    scheme: Scheme,
    rng: R,
}

impl ThemeMaker<StdRng> {
    /// A maker seeded from system entropy.
    #[must_use]
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            rng: StdRng::from_entropy(),
        }
    }

    /// A deterministic maker — the same seed reproduces the same palettes.
    #[must_use]
    pub fn seeded(scheme: Scheme, seed: u64) -> Self {
        Self {
            scheme,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> ThemeMaker<R> {
    /// A maker driven by a caller-supplied rng.
    pub const fn with_rng(scheme: Scheme, rng: R) -> Self {
        Self { scheme, rng }
    }

    /// The scheme this maker generates.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Generate a theme with `count` colors.
    ///
    /// Main colors come first in generation order, contrast colors (if the
    /// count asks for them) last.
    ///
    /// # Errors
    ///
    /// [`ThemeError::ColorCount`] when `count` is outside the scheme's
    /// supported range; [`ThemeError::Color`] if a generated component
    /// fails color validation.
    pub fn generate(&mut self, count: usize) -> Result<Palette> {
        let range = self.scheme.color_range();
        if !range.contains(&count) {
            return Err(ThemeError::ColorCount {
                scheme: self.scheme,
                requested: count,
                min: *range.start(),
                max: *range.end(),
            });
        }

        let seed = Seed::draw(&mut self.rng);
        let colors = match self.scheme {
            Scheme::Monochrome => self.monochrome_colors(&seed, count)?,
            _ => self.multi_hue_colors(&seed, count)?,
        };

        debug!(
            "generated {} theme: {count} colors from base hue {}",
            self.scheme, seed.hue
        );
        Ok(Palette::new(self.scheme, colors))
    }

    /// Monochrome: one hue, lightness stepped evenly from darkest to
    /// lightest, saturation re-jittered per color.
    fn monochrome_colors(&mut self, seed: &Seed, count: usize) -> Result<Vec<Color>> {
        // One fewer step than colors, so both endpoints are hit exactly.
        let step = (MAX_LIGHTNESS - MIN_LIGHTNESS) / (count - 1) as f32;

        let mut colors = Vec::with_capacity(count);
        for i in 0..count {
            let lightness = (i as f32).mul_add(step, MIN_LIGHTNESS);
            let saturation = rng::jitter(&mut self.rng, seed.saturation);
            colors.push(Color::new(seed.hue, saturation, lightness)?);
        }
        Ok(colors)
    }

    /// Multi-hue schemes: main colors at the scheme's hue positions, then
    /// the count-dependent contrast colors.
    fn multi_hue_colors(&mut self, seed: &Seed, count: usize) -> Result<Vec<Color>> {
        let hues = self.scheme.main_hues(seed.hue);

        let mut colors = Vec::with_capacity(count);
        for &hue in &hues {
            let saturation = rng::jitter(&mut self.rng, seed.saturation);
            colors.push(Color::new(hue, saturation, seed.lightness)?);
        }

        // count is capped at main + 2 by the scheme's color range.
        match count - hues.len() {
            1 if seed.lightness > CONTRAST_MIDPOINT => {
                colors.push(self.contrast_color(seed, &hues, MIN_LIGHTNESS)?);
            }
            1 => {
                colors.push(self.contrast_color(seed, &hues, MAX_LIGHTNESS)?);
            }
            2 => {
                colors.push(self.contrast_color(seed, &hues, MIN_LIGHTNESS)?);
                colors.push(self.contrast_color(seed, &hues, MAX_LIGHTNESS)?);
            }
            _ => {}
        }

        Ok(colors)
    }

    /// A contrast color reuses a hue the theme already produced — never a
    /// new one — at an extreme lightness.
    fn contrast_color(&mut self, seed: &Seed, hues: &[f32], lightness: f32) -> Result<Color> {
        let hue = rng::pick(&mut self.rng, hues);
        let saturation = rng::jitter(&mut self.rng, seed.saturation);
        Ok(Color::new(hue, saturation, lightness)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
