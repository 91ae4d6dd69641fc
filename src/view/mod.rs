//! Presentation of replies to the user.
//!
//! The core never writes to a display; the session hands every [`Reply`] to
//! a [`View`], and [`ConsoleView`] is the production adapter.

pub mod console;

pub use console::ConsoleView;

use crate::commands::{Command, Reply};
use crate::models::Record;
use std::io;

/// A surface that can show contacts, messages and errors.
pub trait View {
    /// Ask for the next command.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Show one contact card.
    fn display_contact(&mut self, record: &Record) -> io::Result<()>;

    /// Show several contacts, one per line.
    fn display_all_contacts(&mut self, records: &[Record]) -> io::Result<()>;

    /// Show the command listing.
    fn display_commands(&mut self, commands: &[Command]) -> io::Result<()>;

    fn display_message(&mut self, message: &str) -> io::Result<()>;

    fn display_error(&mut self, message: &str) -> io::Result<()>;

    /// Show a handler reply. [`Reply::Exit`] renders nothing.
    fn render(&mut self, reply: &Reply) -> io::Result<()> {
        match reply {
            Reply::Message(message) => self.display_message(message),
            Reply::Contact(record) => self.display_contact(record),
            Reply::Contacts(records) => self.display_all_contacts(records),
            Reply::Commands => self.display_commands(&Command::ALL),
            Reply::Error(message) => self.display_error(message),
            Reply::Exit => Ok(()),
        }
    }
}
