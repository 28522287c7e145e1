//! Grid coordinates

use std::fmt;

/// A `(row, col)` pair on the board
///
/// Coordinates are signed so that off-board neighbours can be represented and
/// rejected by the board instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

/// Neighbour offsets: up, down, right, left
///
/// The search visits neighbours in this order, which decides ties between
/// equally long words.
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbours (some may be off the board)
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        DIRECTIONS
            .into_iter()
            .map(move |(dr, dc)| Self::new(self.row + dr, self.col + dc))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_in_fixed_order() {
        let around: Vec<Position> = Position::new(2, 2).neighbors().collect();
        assert_eq!(
            around,
            vec![
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 3),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn neighbors_can_leave_the_grid() {
        let around: Vec<Position> = Position::new(0, 0).neighbors().collect();
        assert!(around.contains(&Position::new(-1, 0)));
        assert!(around.contains(&Position::new(0, -1)));
    }

    #[test]
    fn display_format() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
    }
}
