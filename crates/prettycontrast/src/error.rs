//! Utility module with prettycontrast's errors.
//!
//! Only malformed input is an error. An optimization target that no color can
//! meet is an expected outcome and hence encoded as `None` or an empty vector
//! by the [`optimize`](crate::optimize) module.

/// An erroneous color.
///
/// The first two variants, [`ColorError::UnexpectedLength`] and
/// [`ColorError::MalformedHex`], are raised while parsing hashed hexadecimal
/// colors and together form the *invalid color* category, as determined by
/// [`ColorError::is_invalid_color`]. The remaining variants are raised while
/// parsing the functional notation accepted by
/// [`AnyColor`](crate::AnyColor).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// A hexadecimal color with a digit count other than 3 or 6. For example,
    /// `#00` is missing a digit, whereas `#00000` is missing one too.
    #[error("hex color {input:?} should have 3 or 6 digits but has {length}")]
    UnexpectedLength { input: String, length: usize },

    /// A hexadecimal color with the right length but an unsuitable character.
    /// For example, `#efg` has a malformed third digit.
    #[error("hex color {input:?} should contain only hexadecimal digits but does not")]
    MalformedHex { input: String },

    /// A color that does not match any known shape.
    #[error("color {input:?} should be a hex color or use rgb(), hsl(), lab(), or lch()")]
    UnknownFormat { input: String },

    /// A functional color that is missing a coordinate or its closing
    /// parenthesis. For example, `rgb(1 2)` is missing the third coordinate.
    #[error("color {input:?} should have 3 coordinates but is missing one")]
    MissingCoordinate { input: String },

    /// A functional color with more than three coordinates.
    #[error("color {input:?} should have 3 coordinates but has more")]
    TooManyCoordinates { input: String },

    /// A functional color with a malformed number as coordinate. For example,
    /// `lab(50 0..1 0)` has a malformed second coordinate.
    #[error("color {input:?} should have numeric coordinates but does not")]
    MalformedFloat { input: String },
}

impl ColorError {
    /// Determine whether this error is an invalid hexadecimal color.
    pub fn is_invalid_color(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedLength { .. } | Self::MalformedHex { .. }
        )
    }

    /// Get the offending input.
    pub fn input(&self) -> &str {
        match self {
            Self::UnexpectedLength { input, .. }
            | Self::MalformedHex { input }
            | Self::UnknownFormat { input }
            | Self::MissingCoordinate { input }
            | Self::TooManyCoordinates { input }
            | Self::MalformedFloat { input } => input,
        }
    }
}
