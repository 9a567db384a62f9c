//! Parsing of REPL input lines into commands.

/// A command entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    /// Show the next page of location areas
    Map,
    /// Show the previous page of location areas
    MapBack,
    /// List the Pokemon in an area; `None` when no area was given
    Explore(Option<String>),
    /// Blank input
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse a raw input line.
    ///
    /// The line is trimmed and split at the first space: the head is the
    /// command word, the remainder (trimmed) its argument.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let (word, argument) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => {
                Command::Explore(Some(argument.to_string()).filter(|arg| !arg.is_empty()))
            }
            other => Command::Unknown(other.to_string()),
        }
    }
}
