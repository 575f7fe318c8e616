//! Random scheme selection — a theme from whichever scheme fits the count.
//!
//! A thin layer over the makers: validate the count against the union of
//! all scheme ranges, filter the schemes down to those that support it,
//! pick one uniformly, and delegate. The delegated result is returned
//! unchanged.

use log::trace;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{Result, ThemeError};
use crate::maker::ThemeMaker;
use crate::palette::Palette;
use crate::rng;
use crate::scheme::Scheme;

/// Union of every scheme's color range.
const COUNT_MIN: usize = 2;
const COUNT_MAX: usize = 5;

/// Generates a theme from a uniformly chosen applicable scheme.
///
/// # Examples
///
/// ```
/// use tinct_theme::RandomTheme;
///
/// let palette = RandomTheme::seeded(7).generate(4)?;
/// assert_eq!(palette.len(), 4);
/// # Ok::<(), tinct_theme::ThemeError>(())
/// ```
#[derive(Debug)]
pub struct RandomTheme<R = StdRng> {
    rng: R,
}

impl RandomTheme<StdRng> {
    /// A selector seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A deterministic selector — the same seed reproduces the same
    /// scheme choices and palettes.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTheme<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomTheme<R> {
    /// A selector driven by a caller-supplied rng.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a theme with `count` colors from a uniformly chosen scheme
    /// among those that support the count.
    ///
    /// # Errors
    ///
    /// [`ThemeError::CountOutOfRange`] when `count` is outside `[2, 5]`;
    /// [`ThemeError::Color`] if a generated component fails validation.
    pub fn generate(&mut self, count: usize) -> Result<Palette> {
        if !(COUNT_MIN..=COUNT_MAX).contains(&count) {
            return Err(ThemeError::CountOutOfRange {
                requested: count,
                min: COUNT_MIN,
                max: COUNT_MAX,
            });
        }
        self.generate_for(count)
    }

    /// Generate a theme with a uniformly drawn color count in `[2, 5]`.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Color`] if a generated component fails validation.
    pub fn generate_any(&mut self) -> Result<Palette> {
        let count = rng::uniform(&mut self.rng, COUNT_MIN as i32, COUNT_MAX as i32) as usize;
        self.generate_for(count)
    }

    fn generate_for(&mut self, count: usize) -> Result<Palette> {
        let eligible: Vec<Scheme> = Scheme::all()
            .iter()
            .copied()
            .filter(|scheme| scheme.supports(count))
            .collect();
        let scheme = rng::pick(&mut self.rng, &eligible);
        trace!("selected {scheme} for {count} colors");

        ThemeMaker::with_rng(scheme, &mut self.rng).generate(count)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
