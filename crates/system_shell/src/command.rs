//! Command-line parsing.
//!
//! The keyword is the first whitespace-separated token, matched case-insensitively. Arguments
//! keep their original casing. There is no quoting.

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `help`
    Help,
    /// `clear` or `cls`
    Clear,
    /// `echo <text>`; text is everything after the keyword.
    Echo(String),
    /// `date`
    Date,
    /// `whoami`
    WhoAmI,
    /// `apps`
    Apps,
    /// `ls`
    ListFiles,
    /// `create <name> <content...>`; `None` when an argument is missing.
    Create(Option<(String, String)>),
    /// `notepad` or `notepad <file>`
    Notepad(Option<String>),
    /// `neofetch`
    Neofetch,
    /// `tictactoe`
    TicTacToe,
    /// `browser`
    Browser,
    /// `files`
    Files,
    /// `settings`
    Settings,
    /// `installer`
    Installer,
    /// Blank input.
    Empty,
    /// Anything else; holds the trimmed original input.
    Unknown(String),
}

/// Splits `line` into a lowercased keyword and the untouched remainder.
fn split_keyword(line: &str) -> (String, &str) {
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword.to_lowercase(), rest.trim()),
        None => (line.to_lowercase(), ""),
    }
}

/// Parses a raw command line.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (keyword, rest) = split_keyword(line);
    let no_args = rest.is_empty();
    match keyword.as_str() {
        "help" if no_args => Command::Help,
        "clear" | "cls" if no_args => Command::Clear,
        "echo" => Command::Echo(rest.to_string()),
        "date" if no_args => Command::Date,
        "whoami" if no_args => Command::WhoAmI,
        "apps" if no_args => Command::Apps,
        "ls" if no_args => Command::ListFiles,
        "create" => Command::Create(parse_create_args(rest)),
        "notepad" => Command::Notepad((!no_args).then(|| rest.to_string())),
        "neofetch" if no_args => Command::Neofetch,
        "tictactoe" if no_args => Command::TicTacToe,
        "browser" if no_args => Command::Browser,
        "files" if no_args => Command::Files,
        "settings" if no_args => Command::Settings,
        "installer" if no_args => Command::Installer,
        _ => Command::Unknown(line.to_string()),
    }
}

fn parse_create_args(rest: &str) -> Option<(String, String)> {
    let mut tokens = rest.split_whitespace();
    let name = tokens.next()?;
    let content = tokens.collect::<Vec<_>>().join(" ");
    if content.is_empty() {
        return None;
    }
    Some((name.to_string(), content))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keywords_ignore_case_and_padding() {
        assert_eq!(parse_command("HELP"), Command::Help);
        assert_eq!(parse_command("  help  "), Command::Help);
        assert_eq!(parse_command("Cls"), Command::Clear);
        assert_eq!(parse_command("NeoFetch"), Command::Neofetch);
    }

    #[test]
    fn arguments_keep_their_casing() {
        assert_eq!(
            parse_command("ECHO Hello World"),
            Command::Echo("Hello World".to_string())
        );
        assert_eq!(
            parse_command("notepad Todo.txt"),
            Command::Notepad(Some("Todo.txt".to_string()))
        );
    }

    #[test]
    fn bare_echo_prints_an_empty_line() {
        assert_eq!(parse_command("echo"), Command::Echo(String::new()));
        assert_eq!(parse_command("ECHO   "), Command::Echo(String::new()));
    }

    #[test]
    fn create_joins_content_tokens_with_single_spaces() {
        assert_eq!(
            parse_command("create todo buy   milk"),
            Command::Create(Some(("todo".to_string(), "buy milk".to_string())))
        );
        assert_eq!(parse_command("create todo"), Command::Create(None));
        assert_eq!(parse_command("create"), Command::Create(None));
    }

    #[test]
    fn unexpected_arguments_are_unknown() {
        assert_eq!(
            parse_command("files now"),
            Command::Unknown("files now".to_string())
        );
    }

    #[test]
    fn unknown_keeps_original_input() {
        assert_eq!(parse_command(" Bogus "), Command::Unknown("Bogus".to_string()));
        assert_eq!(parse_command("   "), Command::Empty);
    }
}
