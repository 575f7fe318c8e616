//! # tinct-theme — color-theory theme generation engine
//!
//! Generates sets of related HSL colors from one randomly seeded base hue
//! and saturation. One scheme choice (monochrome, analogous, complementary,
//! split-complementary, triadic) plus a color count produces a cohesive
//! palette, optionally extended with dark/light contrast colors that reuse
//! hues the palette already contains.
//!
//! # Architecture
//!
//! ```text
//! Scheme + color count (+ rng seed)
//!     │
//!     ▼
//! scheme.rs:  main-hue positions on the color wheel (pure math)
//!     │
//!     ▼
//! maker.rs:   seed hue/saturation/lightness, jitter saturation,
//!             inject dark/light contrast colors
//!     │
//!     ▼
//! palette.rs: ordered colors + scheme tag, sortable
//!     │
//!     ▼
//! swatch.rs:  CSS declarations / swatch markup (optional)
//! ```
//!
//! Randomness flows through a single rng owned by the maker, so a fixed
//! seed reproduces a palette exactly. [`RandomTheme`] sits in front of the
//! makers and picks a scheme that fits the requested count.

// Loop indices and integer draws become f32 hue/saturation values.
#![allow(clippy::cast_precision_loss)]
// Integral f32 seed values round-trip through i32 for integer sampling.
#![allow(clippy::cast_possible_truncation)]
// Sampled counts are non-negative by construction.
#![allow(clippy::cast_sign_loss)]

pub mod error;
pub mod maker;
pub mod palette;
pub mod random;
mod rng;
pub mod scheme;
pub mod swatch;

pub use error::ThemeError;
pub use maker::ThemeMaker;
pub use palette::Palette;
pub use random::RandomTheme;
pub use scheme::Scheme;
pub use tinct_color::{Color, ValidationError};
