use std::fmt;

/// Failure to turn user input into a playback command.
///
/// The clock itself never fails; these errors only come from the textual
/// or named dispatch surface.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Input line had no command name.
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    UnexpectedArgument(String),
    InvalidArgument {
        command: String,
        value: String,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::UnknownCommand(name) => write!(f, "unknown command '{name}'"),
            CommandError::MissingArgument(cmd) => write!(f, "'{cmd}' needs an argument"),
            CommandError::UnexpectedArgument(cmd) => write!(f, "'{cmd}' takes no argument"),
            CommandError::InvalidArgument { command, value } => {
                write!(f, "invalid argument '{value}' for '{command}'")
            }
        }
    }
}

impl std::error::Error for CommandError {}
