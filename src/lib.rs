//! Contact Book - a command-line assistant bot for contacts and birthdays.
//!
//! This library keeps an in-memory address book of names, phone numbers and
//! birthdays, answers line commands against it, and lists the birthdays
//! coming up in the next few days, moving weekend dates to Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: Contact records and the name-keyed contact store
//! - **birthdays**: Upcoming birthday projection
//! - **repositories**: Snapshot persistence for the whole store
//! - **bot**: Command parsing, dispatch and the interactive session
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod birthdays;
pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use birthdays::{upcoming_birthdays, UpcomingBirthday};
pub use bot::{Command, Dispatcher, Session};
pub use config::Config;
pub use domain::{Birthday, ContactName, DateError, NameError, PhoneError, PhoneNumber};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{
    AddBirthdayOutcome, AddPhoneOutcome, ContactStore, EditError, Record, RemovePhoneOutcome,
};
pub use repositories::{JsonFileRepository, SnapshotRepository};
