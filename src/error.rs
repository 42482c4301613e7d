//! Error types for the contact agenda.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// A contact field failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No contact with the given id
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// A contact with the given id already exists
    #[error("Duplicate contact id: {0}")]
    DuplicateId(String),

    /// Import source does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// CSV header lacks required columns
    #[error("Missing required CSV columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A record in an otherwise well-formed backing file is invalid
    #[error("Invalid record #{index} in backing store: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// Failed to read or write CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to encode or decode JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgendaError {
    /// True for errors caused by caller input rather than storage.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::NotFound(_)
                | Self::DuplicateId(_)
                | Self::FileNotFound(_)
                | Self::MissingColumns(_)
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AgendaError
pub type AgendaResult<T> = Result<T, AgendaError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgendaError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "Contact not found: abc");

        let err = AgendaError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "Validation failed: Name cannot be empty");

        let err = AgendaError::MissingColumns(vec!["phone".to_string(), "email".to_string()]);
        assert_eq!(err.to_string(), "Missing required CSV columns: phone, email");

        let err = ConfigError::InvalidValue {
            var: "AGENDA_HTTP_ADDR".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for AGENDA_HTTP_ADDR: bad");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AgendaError::from(ValidationError::EmptyName).is_client_error());
        assert!(AgendaError::FileNotFound(PathBuf::from("x.csv")).is_client_error());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(!AgendaError::from(io).is_client_error());
    }
}
