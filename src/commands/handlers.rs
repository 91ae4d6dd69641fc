//! Command handlers.
//!
//! Each handler checks its arguments, operates on the address book and
//! returns a [`Reply`]. Handlers return precise [`CommandError`]s; [`guarded`]
//! is the single place where those errors become user-facing text.

use super::Command;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Text shown for failures the handlers did not anticipate.
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// The outcome of a command, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A plain status message
    Message(String),

    /// One contact card
    Contact(Record),

    /// A list of contacts
    Contacts(Vec<Record>),

    /// The command listing
    Commands,

    /// A failure explained to the user
    Error(String),

    /// End the session
    Exit,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }
}

/// Everything a handler may touch while running one command.
pub struct CommandContext<'a> {
    pub book: &'a mut AddressBook,

    /// Date that birthday queries count from
    pub today: NaiveDate,

    /// Largest window accepted by `birthdays`
    pub max_birthday_window_days: u32,
}

/// Run a handler call and turn any error into a [`Reply::Error`].
///
/// Validation, not-found and argument errors keep their own message.
/// Anything else is logged and reduced to [`GENERIC_FAILURE`].
pub fn guarded<F>(call: F) -> Reply
where
    F: FnOnce() -> CommandResult<Reply>,
{
    match call() {
        Ok(reply) => reply,
        Err(CommandError::Unexpected(detail)) => {
            warn!(%detail, "command failed unexpectedly");
            Reply::Error(GENERIC_FAILURE.to_string())
        }
        Err(err) => {
            debug!(error = %err, "command rejected");
            Reply::Error(err.to_string())
        }
    }
}

/// Route a parsed command to its handler.
pub fn dispatch(command: Command, args: &[String], ctx: &mut CommandContext<'_>) -> Reply {
    debug!(%command, args = args.len(), "dispatching command");

    match command {
        Command::Hello => Reply::message("How can I help you?"),
        Command::Help => Reply::Commands,
        Command::Exit => Reply::Exit,
        Command::Add => guarded(|| add_contact(args, ctx.book)),
        Command::Change => guarded(|| change_contact(args, ctx.book)),
        Command::Phone => guarded(|| show_phone(args, ctx.book)),
        Command::All => guarded(|| show_all(args, ctx.book)),
        Command::AddBirthday => guarded(|| add_birthday(args, ctx.book)),
        Command::ShowBirthday => guarded(|| show_birthday(args, ctx.book, ctx.today)),
        Command::Birthdays => guarded(|| {
            upcoming_birthdays(args, ctx.book, ctx.today, ctx.max_birthday_window_days)
        }),
        Command::Delete => guarded(|| delete_contact(args, ctx.book)),
    }
}

fn invalid_arguments(command: Command) -> CommandError {
    CommandError::InvalidArguments {
        usage: command.usage().to_string(),
    }
}

fn existing<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::Book(BookError::ContactNotFound(name.to_string())))
}

fn existing_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::Book(BookError::ContactNotFound(name.to_string())))
}

/// `add [name] [phone]`: create the contact or append a phone to it.
///
/// The phone is validated before anything is stored, so a bad number never
/// leaves an empty contact behind. Words after the phone are ignored.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let [name, phone, ..] = args else {
        return Err(invalid_arguments(Command::Add));
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(Reply::message("Contact updated."));
    }

    let record = Record::build(name.as_str(), [phone.as_str()], None)?;
    book.add_record(record);
    Ok(Reply::message("Contact added."))
}

/// `change [name] [old_phone] [new_phone]`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let [name, old_phone, new_phone] = args else {
        return Err(invalid_arguments(Command::Change));
    };

    existing_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok(Reply::message(format!("Contact {} phone has been updated.", name)))
}

/// `phone [name]`
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<Reply> {
    let [name] = args else {
        return Err(invalid_arguments(Command::Phone));
    };

    Ok(Reply::Contact(existing(book, name)?.clone()))
}

/// `all`
pub fn show_all(args: &[String], book: &AddressBook) -> CommandResult<Reply> {
    if !args.is_empty() {
        return Err(invalid_arguments(Command::All));
    }
    if book.is_empty() {
        return Ok(Reply::message("No contacts saved."));
    }
    Ok(Reply::Contacts(book.iter().cloned().collect()))
}

/// `add-birthday [name] [DD.MM.YYYY]`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let [name, birthday] = args else {
        return Err(invalid_arguments(Command::AddBirthday));
    };

    existing_mut(book, name)?.add_birthday(birthday)?;
    Ok(Reply::message(format!("Birthday for {} set to {}.", name, birthday)))
}

/// `show-birthday [name]`
pub fn show_birthday(
    args: &[String],
    book: &AddressBook,
    today: NaiveDate,
) -> CommandResult<Reply> {
    let [name] = args else {
        return Err(invalid_arguments(Command::ShowBirthday));
    };

    let record = existing(book, name)?;
    if record.birthday().is_none() {
        return Ok(Reply::message(format!("No birthday set for {}.", name)));
    }

    let days = record.days_to_next_birthday_on(today).ok_or_else(|| {
        CommandError::Unexpected(format!("birthday of {} cannot be placed after {}", name, today))
    })?;
    Ok(Reply::message(format!("{} days until {}'s birthday.", days, name)))
}

/// `birthdays [days]`: contacts whose birthday is due within the window.
pub fn upcoming_birthdays(
    args: &[String],
    book: &AddressBook,
    today: NaiveDate,
    max_days: u32,
) -> CommandResult<Reply> {
    let [raw_days] = args else {
        return Err(invalid_arguments(Command::Birthdays));
    };

    let days = raw_days
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidDays(raw_days.clone()))?;
    if days > max_days {
        return Err(CommandError::InvalidDays(raw_days.clone()));
    }

    let upcoming = book.upcoming_birthdays_on(today, days);
    if upcoming.is_empty() {
        return Ok(Reply::message("No upcoming birthdays found."));
    }
    Ok(Reply::Contacts(upcoming.into_iter().cloned().collect()))
}

/// `delete [name]`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let [name] = args else {
        return Err(invalid_arguments(Command::Delete));
    };

    book.delete(name)?;
    Ok(Reply::message(format!("Contact {} deleted.", name)))
}
