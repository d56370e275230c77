use super::Kind;

/// Everything that can go wrong with a line of input. All of these are
/// reported and forgotten; none of them stops the command loop.
pub enum Error {
    BadArgumentCount,
    UnknownVariable,
    UnknownCommand(String),
    BadValue(String, Kind),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BadArgumentCount => write!(f, "Incorrect number of arguments!"),
            Error::UnknownVariable => write!(f, "Incorrect variable name!"),
            Error::UnknownCommand(command) => write!(
                f,
                "Unrecognized command: {}.\nType 'help' if you need to see the available options.",
                command
            ),
            Error::BadValue(value, kind) => write!(
                f,
                "Could not read the value \"{}\" and cast it to type \"{}\".",
                value, kind
            ),
        }
    }
}
