//! Domain value objects and types.
//!
//! Contact names, phone numbers and birthdays are wrapped in value objects
//! that validate at construction time, so an invalid value can never sit
//! inside a [`Record`](crate::models::Record).

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{validate_birthday, Birthday, DATE_FORMAT};
pub use errors::{DateError, NameError, PhoneError};
pub use name::ContactName;
pub use phone::{validate_phone, PhoneNumber};
