//! Data models for the address book.
//!
//! A [`Record`] is one contact; the [`AddressBook`] holds records keyed by
//! their names and answers the birthday-window query.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
