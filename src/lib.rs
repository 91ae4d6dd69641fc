//! Address Book Assistant - a personal contact book with phone numbers and birthdays.
//!
//! This library provides the contact data model and its queries, together with the
//! text command layer and the console session that drive it.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone number, birthday) and calendar helpers
//! - **models**: The contact `Record` and the `AddressBook` that holds records by name
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **clock**: Source of the current date for birthday queries
//! - **repositories**: Loading and saving the whole address book
//! - **commands**: Input parsing, command handlers and error-to-message translation
//! - **view**: Rendering replies to the user
//! - **session**: The interactive command loop

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Command, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use repositories::{BookRepository, JsonFileBookRepository};
pub use session::Assistant;
pub use view::{ConsoleView, View};
