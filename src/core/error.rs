//! Error taxonomy for the game engine

use super::{Letter, Position};
use std::fmt;

/// Errors raised by board construction, move validation and dictionary loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed construction parameters (board size, seed word, player list)
    InvalidConfiguration(String),
    /// A proposed placement the game refused
    IllegalMove(IllegalMove),
    /// A player had no placement to offer this turn
    NoLegalMove,
    /// The word source failed or produced nothing usable
    DictionaryLoadFailure(String),
}

/// Reason a placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds(Position),
    Occupied(Position),
    LetterNotAllowed(Letter),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {reason}"),
            Self::IllegalMove(reason) => write!(f, "Illegal move: {reason}"),
            Self::NoLegalMove => write!(f, "No legal move available"),
            Self::DictionaryLoadFailure(reason) => {
                write!(f, "Failed to load dictionary: {reason}")
            }
        }
    }
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(pos) => write!(f, "position {pos} is out of bounds"),
            Self::Occupied(pos) => write!(f, "position {pos} is already occupied"),
            Self::LetterNotAllowed(letter) => {
                write!(f, "letter {letter} is not in the player's letter set")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<IllegalMove> for GameError {
    fn from(reason: IllegalMove) -> Self {
        Self::IllegalMove(reason)
    }
}
