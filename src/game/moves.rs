//! Accepted turn records

use super::player::PlayerId;
use crate::core::Placement;
use crate::search::WordPath;
use std::fmt;

/// A placement the game accepted, and what it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub player: PlayerId,
    pub player_name: String,
    pub placement: Placement,
    /// New word claimed through the placed cell, if any
    pub word: Option<WordPath>,
}

impl Move {
    /// Points earned: the claimed word's length
    #[must_use]
    pub fn points(&self) -> usize {
        self.word.as_ref().map_or(0, WordPath::len)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} places {}", self.player_name, self.placement)?;
        if let Some(word) = &self.word {
            write!(f, " and claims {} (+{})", word.word(), self.points())?;
        }
        Ok(())
    }
}
