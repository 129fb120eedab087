//! Custom error types for folio-dash
//!
//! This module defines the error hierarchy for the dashboard using thiserror.
//! Malformed cell values and unknown currency codes are never errors; they
//! resolve to defaults inside the services.

use thiserror::Error;

/// The main error type for folio-dash operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Network request failures and non-success responses
    #[error("HTTP error: {0}")]
    Http(String),

    /// Exchange-rate payload problems (missing or unusable rates)
    #[error("Exchange rate error: {0}")]
    Rates(String),

    /// Input that cannot be interpreted at all
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FolioError {
    /// Check if this error came from the network layer
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FolioError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for FolioError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for folio-dash operations
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_rates_error_display() {
        let err = FolioError::Rates("missing USD rate".into());
        assert_eq!(err.to_string(), "Exchange rate error: missing USD rate");
        assert!(!err.is_http());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let folio_err: FolioError = io_err.into();
        assert!(matches!(folio_err, FolioError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let folio_err: FolioError = json_err.into();
        assert!(matches!(folio_err, FolioError::Json(_)));
    }
}
