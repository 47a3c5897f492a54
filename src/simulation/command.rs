//! Command alphabet understood by rovers

use super::error::{RoverError, RoverResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Move,
}

impl Command {
    pub fn from_char(c: char) -> Option<Command> {
        match c.to_ascii_uppercase() {
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            'M' => Some(Command::Move),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Move => 'M',
        }
    }
}

/// Parse a whole command string, ignoring case
///
/// Fails on an empty string or on the first character outside L, R, M.
pub fn parse_commands(commands: &str) -> RoverResult<Vec<Command>> {
    if commands.is_empty() {
        return Err(RoverError::InvalidCommand(
            "Rover instructions can't be empty. Please enter valid instructions.".to_string(),
        ));
    }

    commands
        .chars()
        .map(|c| {
            Command::from_char(c).ok_or_else(|| {
                RoverError::InvalidCommand(format!(
                    "Invalid instruction '{}'. Rover instructions may only contain L, R and M.",
                    c
                ))
            })
        })
        .collect()
}
