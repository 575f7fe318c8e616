//! Uniform integer sampling for theme generation.
//!
//! All randomness in a theme comes through these three helpers, driven by
//! whatever [`rand::Rng`] the caller seeded. Draws are whole numbers
//! returned as `f32`, so generated components print cleanly in `hsl()`
//! strings.

use rand::Rng;

/// Saturation jitter half-width, in percent.
const DEVIATION: i32 = 10;

/// A uniformly distributed integer in `[min, max]` inclusive, as `f32`.
pub(crate) fn uniform<R: Rng>(rng: &mut R, min: i32, max: i32) -> f32 {
    rng.gen_range(min..=max) as f32
}

/// Vary `value` by a uniform draw within ±10 of it.
///
/// The result is not clamped to any component range; `Color` validation
/// is the backstop for a reference value near a legal bound.
pub(crate) fn jitter<R: Rng>(rng: &mut R, value: f32) -> f32 {
    let value = value as i32;
    uniform(rng, value - DEVIATION, value + DEVIATION)
}

/// A uniformly picked element of a non-empty slice.
pub(crate) fn pick<R: Rng, T: Copy>(rng: &mut R, slice: &[T]) -> T {
    slice[rng.gen_range(0..slice.len())]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
