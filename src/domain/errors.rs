//! Domain error types
//!
//! This module defines the error hierarchy for SA Requests.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the crate. Rendering
/// errors are fatal to a build call and reach the caller; write errors are
/// absorbed by [`crate::core::requests::write_requests`].
#[derive(Debug, Error)]
pub enum RequestsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A native object could not be rendered into its XML form
    #[error("Rendering error: {0}")]
    Rendering(String),

    /// XML or JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl RequestsError {
    /// Shorthand for a rendering error on a named object
    pub fn rendering(what: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        RequestsError::Rendering(format!("{what}: {reason}"))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RequestsError {
    fn from(err: std::io::Error) -> Self {
        RequestsError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RequestsError {
    fn from(err: serde_json::Error) -> Self {
        RequestsError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RequestsError {
    fn from(err: toml::de::Error) -> Self {
        RequestsError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_error_display() {
        let err = RequestsError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_rendering_helper() {
        let err = RequestsError::rendering("series 'b1'", "invalid period");
        assert!(matches!(err, RequestsError::Rendering(_)));
        assert_eq!(err.to_string(), "Rendering error: series 'b1': invalid period");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: RequestsError = io_err.into();
        assert!(matches!(err, RequestsError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RequestsError = json_err.into();
        assert!(matches!(err, RequestsError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: RequestsError = toml_err.into();
        assert!(matches!(err, RequestsError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_requests_error_implements_std_error() {
        let err = RequestsError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
