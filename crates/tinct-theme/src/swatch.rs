//! CSS rendering — declarations and swatch markup for generated colors.
//!
//! The library itself never touches a document; these helpers serialize
//! styling decisions as text for whatever host renders them. Each helper
//! mirrors one CSS property a palette color is typically applied to.

use std::fmt::Write;

use tinct_color::Color;

use crate::palette::Palette;

/// Rendered swatch diameter, in pixels.
const SWATCH_SIZE_PX: u32 = 50;

/// A `color` declaration for text.
#[must_use]
pub fn text_color(color: &Color) -> String {
    format!("color: {};", color.hsl())
}

/// A `background-color` declaration.
#[must_use]
pub fn background_color(color: &Color) -> String {
    format!("background-color: {};", color.hsl())
}

/// A `border` declaration. The style is forced to `solid` so the color
/// is visible even when the host sets no border style of its own.
#[must_use]
pub fn border(color: &Color) -> String {
    format!("border: solid {};", color.hsl())
}

/// An `outline` declaration, style forced to `solid`.
#[must_use]
pub fn outline(color: &Color) -> String {
    format!("outline: solid {};", color.hsl())
}

/// A `text-decoration` declaration, line forced to `underline`.
#[must_use]
pub fn text_decoration(color: &Color) -> String {
    format!("text-decoration: underline {};", color.hsl())
}

/// A circular swatch element for one color, with inline styling.
#[must_use]
pub fn swatch_html(color: &Color) -> String {
    format!(
        "<div style=\"{} width: {SWATCH_SIZE_PX}px; height: {SWATCH_SIZE_PX}px; \
         border-radius: 50%;\"></div>",
        background_color(color)
    )
}

/// A `:root` block exposing the palette as CSS custom properties,
/// `--tinct-0` through `--tinct-N` in palette order.
#[must_use]
pub fn css_variables(palette: &Palette) -> String {
    let mut out = String::from(":root {\n");
    for (i, color) in palette.colors().iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  --tinct-{i}: {};", color.hsl());
    }
    out.push_str("}\n");
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
