//! Record model: one contact's name, phone numbers and birthday.

use crate::domain::{Birthday, ContactName, DateError, PhoneError, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result of [`Record::add_phone`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPhoneOutcome {
    /// The number was appended.
    Added,
    /// An equal number was already in the record; nothing changed.
    AlreadyPresent,
}

/// Result of [`Record::remove_phone`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovePhoneOutcome {
    Removed,
    NotFound,
}

/// Result of [`Record::add_birthday`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddBirthdayOutcome {
    /// The birthday was stored.
    Set,
    /// A birthday was already stored; it was left untouched.
    AlreadySet,
}

/// Errors from [`Record::edit_phone`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The number to replace is not in the record.
    #[error("Phone you are trying to edit is not in the record: {0}")]
    NotFound(String),

    /// The replacement number failed validation.
    #[error(transparent)]
    InvalidFormat(#[from] PhoneError),
}

/// A contact in the address book.
///
/// The name is fixed at creation. Phone numbers keep insertion order and
/// never repeat. The birthday can be set once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number unless an equal one is already present.
    ///
    /// The duplicate check runs before validation, matching on the raw value.
    ///
    /// # Errors
    ///
    /// Returns a `PhoneError` if `number` is new and not ten digits.
    pub fn add_phone(&mut self, number: &str) -> Result<AddPhoneOutcome, PhoneError> {
        if self.find_phone(number).is_some() {
            return Ok(AddPhoneOutcome::AlreadyPresent);
        }
        self.phones.push(PhoneNumber::new(number)?);
        Ok(AddPhoneOutcome::Added)
    }

    /// Replace `old_number` with `new_number`, keeping its position.
    ///
    /// # Errors
    ///
    /// `EditError::NotFound` if `old_number` is absent, otherwise
    /// `EditError::InvalidFormat` if `new_number` is not a valid phone.
    /// The phone list is unchanged on error.
    pub fn edit_phone(&mut self, old_number: &str, new_number: &str) -> Result<(), EditError> {
        let position = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old_number)
            .ok_or_else(|| EditError::NotFound(old_number.to_string()))?;

        self.phones[position] = PhoneNumber::new(new_number)?;
        Ok(())
    }

    pub fn remove_phone(&mut self, number: &str) -> RemovePhoneOutcome {
        match self.phones.iter().position(|phone| phone.as_str() == number) {
            Some(position) => {
                self.phones.remove(position);
                RemovePhoneOutcome::Removed
            }
            None => RemovePhoneOutcome::NotFound,
        }
    }

    /// First phone equal to `number`, if any.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Store the birthday if none is set yet.
    ///
    /// An existing birthday is never overwritten, even by a malformed value:
    /// `AlreadySet` wins over validation.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidFormat` if no birthday is set and `value`
    /// is not a real `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, value: &str) -> Result<AddBirthdayOutcome, DateError> {
        if self.birthday.is_some() {
            return Ok(AddBirthdayOutcome::AlreadySet);
        }
        self.birthday = Some(Birthday::parse(value)?);
        Ok(AddBirthdayOutcome::Set)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
