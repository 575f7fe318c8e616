// tinct-theme demo — one palette per scheme, printed as colors and CSS.
//
// Generates every scheme at its largest supported count from a fixed
// seed, so repeated runs show the same palettes.
//
// Usage:
//   cargo run -p tinct-theme --example swatches

use tinct_theme::{Scheme, ThemeError, ThemeMaker, swatch};

fn main() -> Result<(), ThemeError> {
    for &scheme in Scheme::all() {
        let count = *scheme.color_range().end();
        let palette = ThemeMaker::seeded(scheme, 42).generate(count)?;

        println!("{scheme} ({count} colors)");
        for color in palette.colors() {
            println!("  {color}");
        }
        println!("{}", swatch::css_variables(&palette));
    }
    Ok(())
}
