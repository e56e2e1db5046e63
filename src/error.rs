//! Error types for the addressbook crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a record's phone list.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit does not exist on the record
    #[error("Phone {0} not found")]
    PhoneNotFound(String),
}

/// Errors that can occur while persisting an address book to disk.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File could not be created, opened, or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::PhoneNotFound("5551234567".to_string());
        assert_eq!(err.to_string(), "Phone 5551234567 not found");

        let err = RecordError::from(ValidationError::InvalidPhone("bad".to_string()));
        assert_eq!(
            err.to_string(),
            "Phone number must be a ten digit string of digits: bad"
        );

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("ADDRESS_BOOK_PAGE_SIZE"));
    }

    #[test]
    fn test_storage_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorageError::from(io);
        assert!(err.to_string().contains("denied"));
    }
}
