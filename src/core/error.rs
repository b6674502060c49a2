//! Error types for the color models
//!
//! Every failure the library can produce is an [`ColorError::InvalidColor`]:
//! out-of-range components, malformed hex strings, strict-mode hash
//! violations and malformed color notation all share the one kind.

use thiserror::Error;

/// Main error type for color construction and conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input does not describe a representable color
    #[error("{0}")]
    InvalidColor(String),
}

impl ColorError {
    /// Error for a numeric component outside its allowed range.
    pub fn out_of_range(field: &str, value: i32, min: i32, max: i32) -> Self {
        ColorError::InvalidColor(format!(
            "\"{}\" is not a supported value, {} must be between {} and {}.",
            value, field, min, max
        ))
    }

    /// Error for a string that is not a supported hex color.
    pub fn malformed_hex(input: &str) -> Self {
        ColorError::InvalidColor(format!("\"{}\" is not a supported hex color.", input))
    }

    /// Error for a hex string lacking the `#` prefix while in strict mode.
    pub fn missing_hash(input: &str) -> Self {
        ColorError::InvalidColor(format!(
            "\"{}\" must start with \"#\" in strict mode.",
            input
        ))
    }

    /// Error for color notation that could not be understood at all.
    pub fn unrecognized(input: &str) -> Self {
        ColorError::InvalidColor(format!("\"{}\" is not a supported color.", input))
    }

    /// The human readable message.
    pub fn message(&self) -> &str {
        match self {
            ColorError::InvalidColor(message) => message,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ColorError>;
