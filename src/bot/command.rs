//! Parsing of input lines into commands.

use crate::error::{CommandError, CommandResult};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    /// Create a contact, or add a phone to an existing one.
    Add { name: String, phone: Option<String> },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
    /// Any verb not listed above.
    Unknown(String),
}

impl Command {
    /// `true` for `close` and `exit`.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

/// Positional arguments after the verb.
struct Args<'a> {
    parts: std::vec::IntoIter<&'a str>,
    usage: &'static str,
}

impl<'a> Args<'a> {
    fn required(&mut self) -> CommandResult<String> {
        self.parts
            .next()
            .map(str::to_string)
            .ok_or(CommandError::MissingArgument { usage: self.usage })
    }

    fn optional(&mut self) -> Option<String> {
        self.parts.next().map(str::to_string)
    }
}

/// Split a line into a command.
///
/// The verb is case-insensitive; arguments are kept verbatim and any extra
/// ones are ignored. A blank line yields `Ok(None)`.
///
/// # Errors
///
/// Returns `CommandError::MissingArgument` when a known verb lacks one of its
/// required arguments.
pub fn parse_input(line: &str) -> CommandResult<Option<Command>> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let verb = verb.to_lowercase();
    let rest: Vec<&str> = parts.collect();
    let args = |usage: &'static str| Args {
        parts: rest.clone().into_iter(),
        usage,
    };

    let command = match verb.as_str() {
        "hello" => Command::Hello,
        "close" | "exit" => Command::Exit,
        "all" => Command::All,
        "birthdays" => Command::Birthdays,
        "add" => {
            let mut args = args("add <name> [phone]");
            Command::Add {
                name: args.required()?,
                phone: args.optional(),
            }
        }
        "change" => {
            let mut args = args("change <name> <old phone> <new phone>");
            Command::Change {
                name: args.required()?,
                old_phone: args.required()?,
                new_phone: args.required()?,
            }
        }
        "phone" => Command::Phone {
            name: args("phone <name>").required()?,
        },
        "remove-phone" => {
            let mut args = args("remove-phone <name> <phone>");
            Command::RemovePhone {
                name: args.required()?,
                phone: args.required()?,
            }
        }
        "delete" => Command::Delete {
            name: args("delete <name>").required()?,
        },
        "add-birthday" => {
            let mut args = args("add-birthday <name> <DD.MM.YYYY>");
            Command::AddBirthday {
                name: args.required()?,
                birthday: args.required()?,
            }
        }
        "show-birthday" => Command::ShowBirthday {
            name: args("show-birthday <name>").required()?,
        },
        other => Command::Unknown(other.to_string()),
    };

    Ok(Some(command))
}
