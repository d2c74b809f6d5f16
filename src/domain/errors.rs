//! Domain validation errors.

use thiserror::Error;

/// A phone number failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// Not exactly ten characters long.
    #[error("Incorrect length of phone, must be 10 digits")]
    WrongLength(String),

    /// Contains something other than the digits 0-9.
    #[error("Phone must include only numbers, '{0}' is not a number")]
    NotNumeric(String),
}

/// A birthday string failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Not `DD.MM.YYYY`, or not a real calendar date.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidFormat(String),
}

/// A contact name failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The name is empty or whitespace only.
    #[error("Contact name cannot be empty")]
    Empty,
}
