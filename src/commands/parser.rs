//! Splits a line of user input into a command word and its arguments.

/// One line of input, split into a command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lowercased command word
    pub command: String,

    /// Remaining whitespace-separated words, verbatim
    pub args: Vec<String>,
}

/// Parse a line of input. Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_and_args() {
        let parsed = parse_input("  ADD John 1234567890 ").unwrap();
        assert_eq!(parsed.command, "add");
        assert_eq!(parsed.args, vec!["John", "1234567890"]);
    }

    #[test]
    fn test_parse_keeps_argument_case() {
        let parsed = parse_input("phone JOHN").unwrap();
        assert_eq!(parsed.args, vec!["JOHN"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input(" \t ").is_none());
    }
}
