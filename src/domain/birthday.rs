//! Birthday value object.

use super::errors::DateError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `chrono` format string for the `DD.MM.YYYY` display form.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("date shape regex is valid")
});

/// Check that `value` is a real calendar date written as `DD.MM.YYYY`.
///
/// Both the shape (two digit day and month, four digit year) and the date
/// itself are checked, so `30.02.2024` and `1.6.2024` are rejected.
///
/// # Errors
///
/// Returns `DateError::InvalidFormat` on any mismatch.
pub fn validate_birthday(value: &str) -> Result<(), DateError> {
    parse_date(value).map(|_| ())
}

fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    if !DATE_SHAPE.is_match(value) {
        return Err(DateError::InvalidFormat(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DateError::InvalidFormat(value.to_string()))
}

/// A contact's date of birth.
///
/// Stored as a calendar date, shown and persisted as `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidFormat` if the value is malformed or not a
    /// real calendar date.
    pub fn parse(value: &str) -> Result<Self, DateError> {
        parse_date(value).map(Self)
    }

    /// The full date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day this birthday is observed in `year`.
    ///
    /// A 29 February birthday is observed on 1 March when `year` is not a
    /// leap year. Returns `None` only if `year` is outside chrono's range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_birthday_accepts_real_dates() {
        for value in ["01.01.2000", "29.02.2024", "31.12.1999", "15.06.1990", "30.04.2023"] {
            assert!(validate_birthday(value).is_ok(), "{value} should be valid");
        }
    }

    #[test]
    fn test_validate_birthday_rejects_impossible_dates() {
        for value in ["30.02.2024", "31.04.2023", "29.02.2023", "00.01.2000", "32.01.2000", "01.13.2000"] {
            assert!(validate_birthday(value).is_err(), "{value} should be invalid");
        }
    }

    #[test]
    fn test_validate_birthday_rejects_wrong_shape() {
        for value in ["", "2024-06-15", "15/06/2024", "1.6.2024", "15.06.24", "15.06.2024 ", "abc"] {
            assert!(
                matches!(validate_birthday(value), Err(DateError::InvalidFormat(_))),
                "{value:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_birthday_parts() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(birthday.day(), 15);
        assert_eq!(birthday.month(), 6);
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    }

    #[test]
    fn test_anniversary_in_regular_year() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(
            birthday.anniversary_in(2024),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn test_leap_day_anniversary() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(
            birthday.anniversary_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            birthday.anniversary_in(2023),
            NaiveDate::from_ymd_opt(2023, 3, 1)
        );
    }

    #[test]
    fn test_birthday_serde() {
        let birthday = Birthday::parse("05.11.1985").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"05.11.1985\"");

        let result: Result<Birthday, _> = serde_json::from_str("\"31.04.2023\"");
        assert!(result.is_err());
    }
}
