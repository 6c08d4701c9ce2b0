use crate::game::Error;

/// The different kinds of line input the terminal accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    /// A column, 1 indexed as shown above the board.
    Col(usize),
    Enter,
    Yes,
    No,
    Quit,
    Help,
    New,
}

impl std::str::FromStr for Input {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "" => Ok(Self::Enter),
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            "stop" | "exit" | "quit" | "s" | "e" | "q" => Ok(Self::Quit),
            "help" | "h" | "?" => Ok(Self::Help),
            "new" | "reset" | "restart" => Ok(Self::New),
            other => match other.parse::<usize>() {
                Ok(col) => Ok(Self::Col(col)),
                Err(_) => Err(Error::InvalidInput(other.to_string())),
            },
        }
    }
}
