//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped by the enums below.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under the name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// The record has no such phone number
    #[error("Phone number {0} is not found.")]
    PhoneNotFound(String),

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the address book snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by command handlers before they are turned into replies.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong number or shape of arguments
    #[error("Invalid arguments. Usage: {usage}")]
    InvalidArguments { usage: String },

    /// The day window of the `birthdays` command is not acceptable
    #[error("Invalid number of days.")]
    InvalidDays(String),

    /// The targeted record or phone does not exist
    #[error(transparent)]
    Book(#[from] BookError),

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Anything the handlers did not anticipate
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
