//! Console adapter for [`View`].

use super::View;
use crate::commands::Command;
use crate::models::Record;
use std::io::{self, Stdout, Write};

/// Writes plain text lines to any writer.
pub struct ConsoleView<W: Write> {
    out: W,
}

impl ConsoleView<Stdout> {
    /// A view on the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for ConsoleView<W> {
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    fn display_contact(&mut self, record: &Record) -> io::Result<()> {
        writeln!(self.out, "Name: {}", record.name())?;
        for phone in record.phones() {
            writeln!(self.out, "Phones: {}", phone)?;
        }
        if let Some(birthday) = record.birthday() {
            writeln!(self.out, "Birthday: {}", birthday)?;
        }
        Ok(())
    }

    fn display_all_contacts(&mut self, records: &[Record]) -> io::Result<()> {
        for record in records {
            writeln!(self.out, "{}", record)?;
        }
        Ok(())
    }

    fn display_commands(&mut self, commands: &[Command]) -> io::Result<()> {
        writeln!(self.out, "Available commands:")?;
        for command in commands {
            writeln!(self.out, "{} - {}", command.usage(), command.description())?;
        }
        Ok(())
    }

    fn display_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    fn display_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "Error: {}", message)
    }
}
