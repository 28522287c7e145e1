//! Word paths found on the board

use crate::core::Position;
use std::fmt;

/// Multiplier applied to the length of a complete word on top of its length
///
/// A complete word of length `n` scores `n + 2n`; an unfinished prefix path
/// scores only `n`.
pub const TERMINAL_BONUS: usize = 2;

/// Score of a traversed path of `len` letters
#[inline]
#[must_use]
pub const fn path_score(len: usize, terminal: bool) -> usize {
    if terminal {
        len + len * TERMINAL_BONUS
    } else {
        len
    }
}

/// An ordered walk over adjacent cells and the string it spells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPath {
    positions: Vec<Position>,
    word: String,
    terminal: bool,
}

impl WordPath {
    #[must_use]
    pub const fn new(positions: Vec<Position>, word: String, terminal: bool) -> Self {
        Self {
            positions,
            word,
            terminal,
        }
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Consume the path, keeping only its positions
    #[must_use]
    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }

    /// Uppercase string spelled by the path
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Whether the path spells a complete dictionary word
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.terminal
    }

    /// Number of letters (cells) on the path
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// See [`path_score`]
    #[inline]
    #[must_use]
    pub fn score(&self) -> usize {
        path_score(self.len(), self.terminal)
    }
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)?;
        if !self.terminal {
            write!(f, "…")?;
        }
        Ok(())
    }
}
