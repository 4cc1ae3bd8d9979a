//! Line commands understood by the interactive prompt.

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  n, next          show another random quote
  a, add <text>    submit a new quote
  l, list          write all quotes to the console log
  h, help          show this help
  q, quit          exit";

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch a random quote.
    Next,
    /// Type the text into the input field and submit it.
    Add(String),
    /// List all quotes.
    List,
    /// Print the help text.
    Help,
    /// Leave the prompt.
    Quit,
    /// Blank line.
    Nothing,
    /// Anything else.
    Unknown(String),
}

/// Parses a prompt line. Only the command word is matched case-insensitively;
/// the rest of the line is passed through untouched.
pub fn parse_action(line: &str) -> Action {
    let line = line.trim();
    if line.is_empty() {
        return Action::Nothing;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };
    match word.to_ascii_lowercase().as_str() {
        "n" | "next" => Action::Next,
        "a" | "add" => Action::Add(rest.to_string()),
        "l" | "list" => Action::List,
        "h" | "help" | "?" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        _ => Action::Unknown(word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(parse_action("n"), Action::Next);
        assert_eq!(parse_action("  NEXT "), Action::Next);
        assert_eq!(parse_action("list"), Action::List);
        assert_eq!(parse_action("q"), Action::Quit);
        assert_eq!(parse_action("?"), Action::Help);
        assert_eq!(parse_action(""), Action::Nothing);
        assert_eq!(parse_action("dance"), Action::Unknown("dance".into()));
    }

    #[test]
    fn add_keeps_the_rest_of_the_line() {
        assert_eq!(
            parse_action("add Make it work, make it right"),
            Action::Add("Make it work, make it right".into())
        );
        assert_eq!(parse_action("a"), Action::Add(String::new()));
    }
}
