//! Domain error types
//!
//! The clinical core never fails: missing or insufficient data resolves to
//! `None`. Errors only come from the edges of the crate (patient files,
//! configuration, logging setup) and are collected in [`PrenatalError`].

use thiserror::Error;

/// Main PrenaTrack error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum PrenatalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// A raw patient field could not be interpreted
    #[error("Invalid value for {field}: '{value}'")]
    InvalidInput { field: String, value: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl PrenatalError {
    /// Creates an [`PrenatalError::InvalidInput`] for the named field
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        PrenatalError::InvalidInput {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether the error was caused by patient data rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PrenatalError::InvalidInput { .. }
                | PrenatalError::Validation(_)
                | PrenatalError::Serialization(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for PrenatalError {
    fn from(err: std::io::Error) -> Self {
        PrenatalError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PrenatalError {
    fn from(err: serde_json::Error) -> Self {
        PrenatalError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PrenatalError {
    fn from(err: toml::de::Error) -> Self {
        PrenatalError::Serialization(format!("TOML parse error: {err}"))
    }
}
