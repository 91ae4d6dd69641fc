//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name, phone numbers and birthday. These value objects validate at
//! construction time so an invalid value can never be stored in a record.
//! The `anniversary` helpers hold the calendar arithmetic shared by the
//! record and address book birthday queries.

pub mod anniversary;
pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
