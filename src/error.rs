//! Error types for swatch
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations. Parsing is all-or-nothing: a
//! failed parse reports an error and never produces a partial color.

use thiserror::Error;

/// Result type alias for swatch operations
///
/// # Examples
///
/// ```
/// use swatch::{Color, Result};
///
/// fn brand_color(text: &str) -> Result<Color> {
///     Color::parse(text)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ParseColorError>;

/// Error produced when a textual color form cannot be parsed
///
/// Each variant carries the offending input so callers can report it.
///
/// # Examples
///
/// ```
/// use swatch::{Color, ParseColorError};
///
/// let err = Color::parse("rgb(1, 2)").unwrap_err();
/// assert_eq!(err, ParseColorError::InvalidFormat("rgb(1, 2)".to_string()));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The text matches none of the recognized color grammars
    #[error("unrecognized color format: {0}")]
    InvalidFormat(String),

    /// A `#RRGGBB` form with the wrong length or non-hex digits
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A channel or alpha component that is not a number of the expected kind
    #[error("invalid color component: {0}")]
    InvalidComponent(String),

    /// A numeric component outside its permitted range
    #[error("color component out of range: {0}")]
    OutOfRange(String),
}
