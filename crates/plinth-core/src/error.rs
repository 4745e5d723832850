//! Error types for Plinth
//!
//! Component logic is total; errors only arise when themes or variant names
//! come from outside the program (theme files, command-line flags).

use thiserror::Error;

/// Errors raised while loading or parsing theme configuration
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file is not valid JSON or does not match the theme shape
    #[error("Invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A variant, size or other enumerated option name was not recognised
    #[error("Unknown {kind}: {value}")]
    UnknownVariant {
        /// Which option was being parsed (e.g. "button variant")
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// A component family name was not recognised
    #[error("Unknown component family: {0}")]
    UnknownFamily(String),
}

impl ThemeError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        ThemeError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

/// Result type alias using ThemeError
pub type ThemeResult<T> = Result<T, ThemeError>;
