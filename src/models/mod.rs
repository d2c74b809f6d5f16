//! Data models for the address book.
//!
//! A [`Record`] holds one contact; a [`ContactStore`] owns all of them.

pub mod record;
pub mod store;

pub use record::{AddBirthdayOutcome, AddPhoneOutcome, EditError, Record, RemovePhoneOutcome};
pub use store::{ContactStore, DEFAULT_HORIZON_DAYS};
