//! Error handling module for the sdkt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use sdkgen_reflect::RegistryError;
use thiserror::Error;

/// Main error type for the sdkt CLI application.
#[derive(Error, Debug)]
pub enum SdktError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when user input is rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when the registry snapshot cannot be loaded.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when formatting a text report fails.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Result type alias using SdktError.
pub type Result<T> = std::result::Result<T, SdktError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = SdktError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = SdktError::Validation("unknown format".to_string());
        assert_eq!(err.to_string(), "Validation error: unknown format");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SdktError = io_err.into();
        assert!(matches!(err, SdktError::Io(_)));
    }

    #[test]
    fn test_fmt_error_conversion() {
        let err: SdktError = std::fmt::Error.into();
        assert!(matches!(err, SdktError::Fmt(_)));
    }

    #[test]
    fn test_registry_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let registry_err = RegistryError::from(json_err);
        let expected = registry_err.to_string();
        let err: SdktError = registry_err.into();
        assert_eq!(err.to_string(), expected);
    }
}
