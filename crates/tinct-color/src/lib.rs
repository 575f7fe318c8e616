// SPDX-License-Identifier: MIT
//
// tinct-color — the validated HSL color entity for tinct.
//
// The foundation layer for the theme generation engine: a single
// immutable color type whose components are range-checked before the
// value can exist, plus the typed validation error every range check
// in the workspace reports through. Theme generation never has to
// defend against a malformed color — if a `Color` exists, it is legal.
//
// HSL is the only color space modeled. Conversion to and from RGB or
// perceptual spaces is deliberately out of scope; the generated `hsl()`
// strings are already valid CSS color values.

pub mod color;
pub mod error;

pub use color::Color;
pub use error::{ValidationError, check_range};
