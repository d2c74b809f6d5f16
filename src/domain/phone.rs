//! PhoneNumber value object.

use super::errors::PhoneError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a valid phone number.
pub const PHONE_LENGTH: usize = 10;

/// Check that `value` is exactly ten ASCII digits.
///
/// Length is checked before content, so `"12ab"` reports a length problem.
///
/// # Errors
///
/// Returns `PhoneError::WrongLength` or `PhoneError::NotNumeric`.
pub fn validate_phone(value: &str) -> Result<(), PhoneError> {
    if value.chars().count() != PHONE_LENGTH {
        return Err(PhoneError::WrongLength(value.to_string()));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(PhoneError::NotNumeric(value.to_string()));
    }
    Ok(())
}

/// A validated ten digit phone number.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a `PhoneError` if the value is not exactly ten digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, PhoneError> {
        let phone = phone.into();
        validate_phone(&phone)?;
        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
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

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
