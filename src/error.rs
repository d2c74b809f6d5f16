//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::errors`].

use crate::domain::{DateError, NameError, PhoneError};
use crate::models::EditError;
use thiserror::Error;

/// Errors a command can produce.
///
/// None of these are fatal: the dispatcher renders them as a reply and
/// keeps reading commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The named contact is not in the address book
    #[error("There is no such contact. Add contact")]
    ContactNotFound(String),

    /// A required argument was not given
    #[error("Enter the argument for the command. Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error(transparent)]
    Phone(#[from] PhoneError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Errors that can occur while loading or saving the snapshot file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("Snapshot I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid snapshot document
    #[error("Snapshot parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
