//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided birthday string is not a valid calendar date.
    InvalidDate(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidDate(raw) => write!(f, "Invalid date format: {}", raw),
            Self::InvalidPhone(phone) => {
                write!(
                    f,
                    "Phone number must be a ten digit string of digits: {}",
                    phone
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
