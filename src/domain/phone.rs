//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// A phone number is stored as the raw digit string, so two numbers are
/// equal exactly when their digits are equal.
///
/// # Example
///
/// ```
/// use addressbook::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly 10 characters long
    /// - Every character must be an ASCII digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Replace the stored number, re-validating the new value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the new value is invalid;
    /// the stored number is left unchanged in that case.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(phone)?;
        Ok(())
    }

    /// Validate phone format: exactly ten ASCII digits.
    fn is_valid(phone: &str) -> bool {
        phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("555123456").is_err()); // 9 digits
        assert!(PhoneNumber::new("55512345678").is_err()); // 11 digits
        assert!(PhoneNumber::new("555123456x").is_err());
        assert!(PhoneNumber::new("555-123-45").is_err());
        assert!(PhoneNumber::new("+155512345").is_err());
        assert!(PhoneNumber::new("5551234567").is_ok());
        assert!(PhoneNumber::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are digits to Unicode but not ASCII
        assert!(PhoneNumber::new("٥٥٥١٢٣٤٥٦٧").is_err());
    }

    #[test]
    fn test_phone_set_revalidates() {
        let mut phone = PhoneNumber::new("5551234567").unwrap();
        assert!(phone.set("bad").is_err());
        assert_eq!(phone.as_str(), "5551234567");
        phone.set("5559876543").unwrap();
        assert_eq!(phone.as_str(), "5559876543");
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(format!("{}", phone), "5551234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"5551234567\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: PhoneNumber = serde_json::from_str("\"5551234567\"").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
