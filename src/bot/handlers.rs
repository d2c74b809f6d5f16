//! Command handlers.
//!
//! Each handler applies one command to the address book and returns the
//! reply text. Failures come back as [`CommandError`] and are turned into
//! replies by [`Dispatcher::dispatch`].

use super::command::Command;
use crate::domain::{validate_phone, ContactName};
use crate::error::{CommandError, CommandResult};
use crate::models::{
    AddBirthdayOutcome, AddPhoneOutcome, ContactStore, Record, RemovePhoneOutcome,
};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// Routes parsed commands to their handlers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    horizon_days: u32,
    fixed_today: Option<NaiveDate>,
}

impl Dispatcher {
    /// Create a dispatcher whose `birthdays` command looks `horizon_days` ahead.
    pub fn new(horizon_days: u32) -> Self {
        Self {
            horizon_days,
            fixed_today: None,
        }
    }

    /// Pin "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Run `command` against `book` and render the outcome.
    ///
    /// Errors are rendered too; nothing here ends the session.
    pub fn dispatch(&self, command: &Command, book: &mut ContactStore) -> String {
        debug!(?command, "dispatching");
        let result = match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Exit => Ok("Good bye!".to_string()),
            Command::Add { name, phone } => add_contact(book, name, phone.as_deref()),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => change_contact(book, name, old_phone, new_phone),
            Command::Phone { name } => show_phone(book, name),
            Command::RemovePhone { name, phone } => remove_phone(book, name, phone),
            Command::Delete { name } => delete_contact(book, name),
            Command::All => Ok(show_all(book)),
            Command::AddBirthday { name, birthday } => add_birthday(book, name, birthday),
            Command::ShowBirthday { name } => show_birthday(book, name),
            Command::Birthdays => Ok(birthdays(book, self.horizon_days, self.today())),
            Command::Unknown(_) => Ok("Invalid command.".to_string()),
        };

        result.unwrap_or_else(|e| {
            warn!(error = %e, "command failed");
            e.to_string()
        })
    }
}

fn record_mut<'a>(book: &'a mut ContactStore, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn record<'a>(book: &'a ContactStore, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

/// Create the contact if needed, then add the phone if one was given.
///
/// The phone is validated before a new contact is created, so a rejected
/// phone never leaves an empty contact behind.
pub fn add_contact(
    book: &mut ContactStore,
    name: &str,
    phone: Option<&str>,
) -> CommandResult<String> {
    let mut message = "Contact updated.";
    if !book.contains(name) {
        let name = ContactName::new(name)?;
        if let Some(phone) = phone {
            validate_phone(phone)?;
        }
        book.add_record(Record::new(name));
        message = "Contact added.";
    }

    if let Some(phone) = phone {
        let record = record_mut(book, name)?;
        if record.add_phone(phone)? == AddPhoneOutcome::AlreadyPresent {
            return Ok("Phone already in the record!".to_string());
        }
    }
    Ok(message.to_string())
}

pub fn change_contact(
    book: &mut ContactStore,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<String> {
    record_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

pub fn show_phone(book: &ContactStore, name: &str) -> CommandResult<String> {
    Ok(record(book, name)?.to_string())
}

pub fn remove_phone(book: &mut ContactStore, name: &str, phone: &str) -> CommandResult<String> {
    let reply = match record_mut(book, name)?.remove_phone(phone) {
        RemovePhoneOutcome::Removed => "Phone removed.",
        RemovePhoneOutcome::NotFound => {
            "Phone you are trying to remove is not in the record. Add the phone"
        }
    };
    Ok(reply.to_string())
}

/// Deleting an unknown contact is not an error.
pub fn delete_contact(book: &mut ContactStore, name: &str) -> CommandResult<String> {
    let reply = match book.delete(name) {
        Some(_) => "Contact deleted.",
        None => "No such contact, nothing to delete.",
    };
    Ok(reply.to_string())
}

pub fn show_all(book: &ContactStore) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.values()
        .map(|record| {
            let birthday = record
                .birthday()
                .map(ToString::to_string)
                .unwrap_or_else(|| "Not provided".to_string());
            format!("{}, birthday: {}", record, birthday)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn add_birthday(book: &mut ContactStore, name: &str, birthday: &str) -> CommandResult<String> {
    let reply = match record_mut(book, name)?.add_birthday(birthday)? {
        AddBirthdayOutcome::Set => "Birthday added.",
        AddBirthdayOutcome::AlreadySet => "Birthday is already in the record!",
    };
    Ok(reply.to_string())
}

pub fn show_birthday(book: &ContactStore, name: &str) -> CommandResult<String> {
    let record = record(book, name)?;
    Ok(match record.birthday() {
        Some(birthday) => format!("Birthday of contact '{}': {}", record.name(), birthday),
        None => "No birth date provided for this record.".to_string(),
    })
}

pub fn birthdays(book: &ContactStore, horizon_days: u32, today: NaiveDate) -> String {
    let upcoming = book.upcoming_at(horizon_days, today);
    if upcoming.is_empty() {
        return format!("No upcoming birthdays in the next {} days", horizon_days);
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(upcoming.iter().map(ToString::to_string));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        // Monday
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_add_contact_then_update() {
        let mut book = ContactStore::new();
        assert_eq!(
            add_contact(&mut book, "Alice", Some("1111111111")).unwrap(),
            "Contact added."
        );
        assert_eq!(
            add_contact(&mut book, "Alice", Some("2222222222")).unwrap(),
            "Contact updated."
        );
        assert_eq!(
            add_contact(&mut book, "Alice", Some("2222222222")).unwrap(),
            "Phone already in the record!"
        );
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_without_phone() {
        let mut book = ContactStore::new();
        assert_eq!(add_contact(&mut book, "Alice", None).unwrap(), "Contact added.");
        assert!(book.find("Alice").unwrap().phones().is_empty());
    }

    #[test]
    fn test_add_contact_invalid_phone_creates_nothing() {
        let mut book = ContactStore::new();
        let err = add_contact(&mut book, "Alice", Some("123")).unwrap_err();
        assert!(matches!(err, CommandError::Phone(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = ContactStore::new();
        let err = change_contact(&mut book, "Bob", "1111111111", "2222222222").unwrap_err();
        assert_eq!(err, CommandError::ContactNotFound("Bob".to_string()));
    }

    #[test]
    fn test_show_all() {
        let mut book = ContactStore::new();
        assert_eq!(show_all(&book), "No contacts saved.");

        add_contact(&mut book, "Alice", Some("1111111111")).unwrap();
        add_contact(&mut book, "Bob", None).unwrap();
        add_birthday(&mut book, "Bob", "01.02.1990").unwrap();

        assert_eq!(
            show_all(&book),
            "Contact name: Alice, phones: 1111111111, birthday: Not provided\n\
             Contact name: Bob, phones: , birthday: 01.02.1990"
        );
    }

    #[test]
    fn test_birthday_replies() {
        let mut book = ContactStore::new();
        add_contact(&mut book, "Alice", None).unwrap();

        assert_eq!(
            show_birthday(&book, "Alice").unwrap(),
            "No birth date provided for this record."
        );
        assert_eq!(add_birthday(&mut book, "Alice", "15.06.1990").unwrap(), "Birthday added.");
        assert_eq!(
            add_birthday(&mut book, "Alice", "16.06.1990").unwrap(),
            "Birthday is already in the record!"
        );
        assert_eq!(
            show_birthday(&book, "Alice").unwrap(),
            "Birthday of contact 'Alice': 15.06.1990"
        );
    }

    #[test]
    fn test_birthdays_listing() {
        let mut book = ContactStore::new();
        assert_eq!(
            birthdays(&book, 7, today()),
            "No upcoming birthdays in the next 7 days"
        );

        add_contact(&mut book, "Alice", None).unwrap();
        add_birthday(&mut book, "Alice", "15.06.1990").unwrap();
        assert_eq!(
            birthdays(&book, 7, today()),
            "Upcoming birthdays:\nAlice: 17.06.2024"
        );
    }

    #[test]
    fn test_dispatch_renders_errors() {
        let dispatcher = Dispatcher::new(7).with_today(today());
        let mut book = ContactStore::new();

        let reply = dispatcher.dispatch(&Command::Phone { name: "Nobody".to_string() }, &mut book);
        assert_eq!(reply, "There is no such contact. Add contact");

        let reply = dispatcher.dispatch(&Command::Unknown("dance".to_string()), &mut book);
        assert_eq!(reply, "Invalid command.");
    }

    #[test]
    fn test_delete_replies() {
        let mut book = ContactStore::new();
        add_contact(&mut book, "Alice", None).unwrap();

        assert_eq!(delete_contact(&mut book, "Alice").unwrap(), "Contact deleted.");
        assert_eq!(
            delete_contact(&mut book, "Alice").unwrap(),
            "No such contact, nothing to delete."
        );
    }
}
