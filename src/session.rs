//! The interactive assistant session.
//!
//! The book is loaded once before the first command and saved once when the
//! session ends, whether by `exit`/`close`, by end of input or by a failing
//! input stream. Nothing is written in between.

use crate::clock::Clock;
use crate::commands::{dispatch, parse_input, Command, CommandContext, Reply};
use crate::config::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use crate::view::View;
use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";
const INVALID_COMMAND: &str = "Invalid command.";

/// Ties the address book to its storage, its view and a clock.
pub struct Assistant<R, V, C> {
    repository: R,
    view: V,
    clock: C,
    max_birthday_window_days: u32,
}

impl<R, V, C> Assistant<R, V, C>
where
    R: BookRepository,
    V: View,
    C: Clock,
{
    pub fn new(repository: R, view: V, clock: C) -> Self {
        Self {
            repository,
            view,
            clock,
            max_birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }

    /// Set the largest window the `birthdays` command accepts.
    pub fn with_max_birthday_window(mut self, days: u32) -> Self {
        self.max_birthday_window_days = days;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Run the command loop over `input` until exit or end of input.
    ///
    /// The book is saved even when the loop stops on an input or view
    /// failure; that failure is returned after the save.
    ///
    /// # Errors
    ///
    /// Fails if the book cannot be loaded or saved, or if reading input or
    /// writing to the view fails. Command errors never end the session.
    pub fn run<I: BufRead>(&mut self, mut input: I) -> Result<()> {
        let mut book = self
            .repository
            .load()
            .context("failed to load the address book")?;
        info!(records = book.len(), "session started");

        let outcome = self.converse(&mut input, &mut book);
        if let Err(err) = &outcome {
            warn!(error = %format!("{:#}", err), "session interrupted");
        }

        self.repository
            .save(&book)
            .context("failed to save the address book")?;
        info!(records = book.len(), "session finished");
        outcome
    }

    fn converse<I: BufRead>(&mut self, input: &mut I, book: &mut AddressBook) -> Result<()> {
        self.view.display_message(WELCOME)?;

        let mut buf = Vec::new();
        loop {
            self.view.prompt(PROMPT)?;
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("failed to read command input")?;
            if read == 0 {
                debug!("end of input");
                break;
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line, book),
                Err(err) => {
                    debug!(%err, "undecodable input line");
                    Some(Reply::Error(INVALID_COMMAND.to_string()))
                }
            };
            if reply == Some(Reply::Exit) {
                break;
            }
            if let Some(reply) = reply {
                self.view.render(&reply)?;
            }
        }

        self.view.display_message(FAREWELL)?;
        Ok(())
    }

    fn handle_line(&self, line: &str, book: &mut AddressBook) -> Option<Reply> {
        let parsed = parse_input(line)?;

        let reply = match parsed.command.parse::<Command>() {
            Ok(command) => {
                let mut ctx = CommandContext {
                    book,
                    today: self.clock.today(),
                    max_birthday_window_days: self.max_birthday_window_days,
                };
                dispatch(command, &parsed.args, &mut ctx)
            }
            Err(reason) => {
                debug!(%reason, "unrecognised input");
                Reply::Error(INVALID_COMMAND.to_string())
            }
        };
        Some(reply)
    }
}
