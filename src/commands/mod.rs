//! The text command surface of the assistant.
//!
//! A line is parsed into a [`Command`] plus arguments, dispatched to a
//! handler operating on the address book, and answered with a [`Reply`]
//! for the view to render. Handler failures are turned into replies by
//! [`guarded`], so no error escapes to the command loop.

pub mod handlers;
pub mod parser;

pub use handlers::{dispatch, guarded, CommandContext, Reply, GENERIC_FAILURE};
pub use parser::{parse_input, ParsedInput};

use std::fmt;
use std::str::FromStr;

/// Commands understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Help,
    /// `exit` or `close`
    Exit,
}

impl Command {
    /// Every command, in the order the help listing shows them.
    pub const ALL: [Command; 11] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Delete,
        Command::Help,
        Command::Exit,
    ];

    /// The command word as typed by the user.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// Usage line with argument placeholders.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add [name] [phone]",
            Command::Change => "change [name] [old_phone] [new_phone]",
            Command::Phone => "phone [name]",
            Command::All => "all",
            Command::AddBirthday => "add-birthday [name] [DD.MM.YYYY]",
            Command::ShowBirthday => "show-birthday [name]",
            Command::Birthdays => "birthdays [days]",
            Command::Delete => "delete [name]",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// One-line description for the help listing.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Hello => "Greet the assistant",
            Command::Add => "Add a new contact or another phone to an existing one",
            Command::Change => "Change a contact phone",
            Command::Phone => "Show the phone numbers of a contact",
            Command::All => "Show all contacts",
            Command::AddBirthday => "Add a birthday to a contact",
            Command::ShowBirthday => "Show the days left until a contact's birthday",
            Command::Birthdays => "Show the birthdays in the next N days",
            Command::Delete => "Delete a contact",
            Command::Help => "Show this list of commands",
            Command::Exit => "Save the address book and exit (also: close)",
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "delete" => Ok(Command::Delete),
            "help" => Ok(Command::Help),
            "exit" | "close" => Ok(Command::Exit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_parses_back() {
        for command in Command::ALL {
            assert_eq!(command.keyword().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_close_is_exit() {
        assert_eq!("close".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("EXIT".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_unknown_command() {
        assert!("rename".parse::<Command>().is_err());
    }
}
