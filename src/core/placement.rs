//! Single-cell placements

use super::{Letter, Position};
use std::fmt;

/// A letter destined for one cell
///
/// This is what strategies propose and what the game validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub position: Position,
    pub letter: Letter,
}

impl Placement {
    #[inline]
    #[must_use]
    pub const fn new(position: Position, letter: Letter) -> Self {
        Self { position, letter }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.letter, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_letter_and_cell() {
        let placement = Placement::new(Position::new(0, 4), Letter::from_char('Ж').unwrap());
        assert_eq!(placement.to_string(), "Ж at (0, 4)");
    }
}
