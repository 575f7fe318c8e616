//! Typed failures for theme generation.
//!
//! Every public operation validates its arguments before touching any
//! state; all failures here are synchronous and caller-fixable.

use thiserror::Error;
use tinct_color::ValidationError;

use crate::scheme::Scheme;

/// A theme generation request could not be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThemeError {
    /// The requested color count is outside the scheme's supported range.
    #[error("a {scheme} theme holds {min} to {max} colors, got {requested}")]
    ColorCount {
        scheme: Scheme,
        requested: usize,
        min: usize,
        max: usize,
    },

    /// The requested color count is outside every scheme's range.
    #[error("number of colors must be between {min} and {max}, got {requested}")]
    CountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// A generated component failed color validation.
    #[error(transparent)]
    Color(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, ThemeError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_count_message_names_scheme_and_limits() {
        let err = ThemeError::ColorCount {
            scheme: Scheme::Complementary,
            requested: 5,
            min: 2,
            max: 4,
        };
        assert_eq!(
            err.to_string(),
            "a complementary theme holds 2 to 4 colors, got 5"
        );
    }

    #[test]
    fn count_out_of_range_message() {
        let err = ThemeError::CountOutOfRange {
            requested: 7,
            min: 2,
            max: 5,
        };
        assert_eq!(err.to_string(), "number of colors must be between 2 and 5, got 7");
    }

    #[test]
    fn validation_error_passes_through_transparently() {
        let inner = ValidationError::NotFinite { component: "hue" };
        let err = ThemeError::from(inner);
        assert_eq!(err.to_string(), inner.to_string());
    }
}
