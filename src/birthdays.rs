//! Upcoming birthday projection.
//!
//! For every contact with a birthday, find its next occurrence on or after
//! `today`, keep it if it lies within the horizon, and move weekend dates to
//! the following Monday. Results follow store order, not date order.

use crate::domain::DATE_FORMAT;
use crate::models::ContactStore;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// A contact whose birthday falls inside the horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The day to congratulate, after the weekend shift.
    pub celebration_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The celebration date as `DD.MM.YYYY`.
    pub fn celebration_date_str(&self) -> String {
        self.celebration_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.celebration_date.format(DATE_FORMAT))
    }
}

/// List the contacts in `store` whose birthday is 0 to `horizon_days` days
/// after `today`, inclusive.
///
/// The window is checked against the birthday itself. A Saturday or Sunday
/// birthday is then moved to Monday even if that lands past the horizon.
pub fn upcoming_birthdays(
    store: &ContactStore,
    today: NaiveDate,
    horizon_days: u32,
) -> Vec<UpcomingBirthday> {
    store
        .values()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let this_year = birthday.anniversary_in(today.year())?;
            let next = if this_year < today {
                birthday.anniversary_in(today.year() + 1)?
            } else {
                this_year
            };

            let days_until = (next - today).num_days();
            if !(0..=i64::from(horizon_days)).contains(&days_until) {
                return None;
            }

            Some(UpcomingBirthday {
                name: record.name().to_string(),
                celebration_date: shift_off_weekend(next),
            })
        })
        .collect()
}

/// Saturday and Sunday move to the next Monday; weekdays stay put.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
