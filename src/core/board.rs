//! Game board representation
//!
//! A square grid of cells, each either empty or holding a letter. The board
//! keeps a running count of empty cells so fullness checks are O(1).

use super::{GameError, IllegalMove, Letter, Position, alphabet};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Largest supported side length
pub const MAX_BOARD_SIZE: usize = 64;

/// Character used for empty cells in snapshots and rendering
pub const EMPTY_MARK: char = '.';

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled(Letter),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<Letter> {
        match self {
            Self::Filled(letter) => Some(letter),
            Self::Empty => None,
        }
    }

    /// Single-character rendering: the letter, or [`EMPTY_MARK`]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Filled(letter) => letter.to_char(),
            Self::Empty => EMPTY_MARK,
        }
    }
}

/// `size × size` grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    empty: usize,
}

impl Board {
    /// Create a board with `seed` centered on the middle row
    ///
    /// The seed starts at column `size/2 - len/2` on row `size/2`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if:
    /// - `size` is zero or larger than [`MAX_BOARD_SIZE`]
    /// - the seed is longer than a row
    /// - the seed contains symbols outside the alphabet
    ///
    /// # Examples
    /// ```
    /// use balda::core::{Board, Position};
    ///
    /// let board = Board::new(5, "гора").unwrap();
    /// assert_eq!(board.empty_count(), 21);
    /// assert_eq!(board.get(Position::new(2, 0)).and_then(|c| c.letter()).map(|l| l.to_char()), Some('Г'));
    /// assert!(Board::new(0, "").is_err());
    /// ```
    pub fn new(size: usize, seed: &str) -> Result<Self, GameError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfiguration(format!(
                "board size must be between 1 and {MAX_BOARD_SIZE}, got {size}"
            )));
        }

        let letters = alphabet::encode(seed.trim()).ok_or_else(|| {
            GameError::InvalidConfiguration(format!(
                "seed word '{seed}' contains symbols outside the alphabet"
            ))
        })?;

        if letters.len() > size {
            return Err(GameError::InvalidConfiguration(format!(
                "seed word '{seed}' ({} letters) does not fit a row of {size}",
                letters.len()
            )));
        }

        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size],
            empty: size * size,
        };

        let row = size / 2;
        let start = size / 2 - letters.len() / 2;
        for (offset, &letter) in letters.iter().enumerate() {
            board.cells[row * size + start + offset] = Cell::Filled(letter);
        }
        board.empty -= letters.len();

        Ok(board)
    }

    /// Build a board from row strings, `.` marking empty cells
    ///
    /// Handy for setting up positions in tests and tools.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if the rows do not form a
    /// square grid or contain symbols other than letters and `.`.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfiguration(format!(
                "board size must be between 1 and {MAX_BOARD_SIZE}, got {size}"
            )));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size {
                return Err(GameError::InvalidConfiguration(format!(
                    "row {r} has {width} cells, expected {size}"
                )));
            }
            for (c, ch) in row.chars().enumerate() {
                let cell = if ch == EMPTY_MARK {
                    Cell::Empty
                } else {
                    Cell::Filled(Letter::from_char(ch).ok_or_else(|| {
                        GameError::InvalidConfiguration(format!(
                            "unrecognized character '{ch}' in row {r} col {c}"
                        ))
                    })?)
                };
                cells.push(cell);
            }
        }

        let empty = cells.iter().filter(|cell| cell.is_empty()).count();
        Ok(Self { size, cells, empty })
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        let size = self.size as i32;
        if pos.row < 0 || pos.col < 0 || pos.row >= size || pos.col >= size {
            None
        } else {
            Some(pos.row as usize * self.size + pos.col as usize)
        }
    }

    #[inline]
    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.size) as i32, (index % self.size) as i32)
    }

    /// Whether `pos` lies on the board
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Cell at `pos`, or `None` when off the board
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Letter at `pos`, `None` for empty or off-board cells
    #[inline]
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Option<Letter> {
        self.get(pos).and_then(Cell::letter)
    }

    /// Check that `pos` can take a letter without mutating anything
    ///
    /// # Errors
    /// Returns the reason the placement would be refused.
    pub fn check_placement(&self, pos: Position) -> Result<(), IllegalMove> {
        match self.get(pos) {
            None => Err(IllegalMove::OutOfBounds(pos)),
            Some(Cell::Filled(_)) => Err(IllegalMove::Occupied(pos)),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Write `letter` into an empty cell
    ///
    /// Returns `false` without touching the board if `pos` is off the board
    /// or already occupied.
    pub fn place(&mut self, letter: Letter, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) if self.cells[i].is_empty() => {
                self.cells[i] = Cell::Filled(letter);
                self.empty -= 1;
                true
            }
            _ => false,
        }
    }

    /// Place `letter` for the lifetime of the returned guard
    ///
    /// The cell reverts to empty when the guard drops, on every exit path.
    /// Returns `None` under the same conditions as [`Board::place`].
    pub fn tentative(&mut self, letter: Letter, pos: Position) -> Option<Tentative<'_>> {
        if self.place(letter, pos) {
            Some(Tentative {
                board: self,
                position: pos,
            })
        } else {
            None
        }
    }

    fn vacate(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            if !self.cells[i].is_empty() {
                self.cells[i] = Cell::Empty;
                self.empty += 1;
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.empty == 0
    }

    #[inline]
    #[must_use]
    pub const fn empty_count(&self) -> usize {
        self.empty
    }

    #[inline]
    #[must_use]
    pub const fn filled_count(&self) -> usize {
        self.cells.len() - self.empty
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(|i| self.position_of(i))
    }

    /// Empty positions in row-major order
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.get(pos) == Some(Cell::Empty))
            .collect()
    }

    /// Read-only grid of single characters for rendering
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
            .collect()
    }

    /// Rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|cell| cell.to_char().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A letter placed on the board until this guard drops
///
/// Derefs to the board, so nested tentative placements and read-only queries
/// work through the guard.
pub struct Tentative<'b> {
    board: &'b mut Board,
    position: Position,
}

impl Deref for Tentative<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Tentative<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.board.vacate(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn seed_word_centered_on_middle_row() {
        let board = Board::new(5, "ГОРА").unwrap();
        assert_eq!(board.empty_count(), 21);
        assert!(!board.is_full());

        let snapshot = board.snapshot();
        assert_eq!(snapshot[2], vec!['Г', 'О', 'Р', 'А', '.']);
        assert!(snapshot[0].iter().all(|&c| c == EMPTY_MARK));
    }

    #[test]
    fn odd_seed_centered() {
        let board = Board::new(5, "кот").unwrap();
        assert_eq!(board.snapshot()[2], vec!['.', 'К', 'О', 'Т', '.']);
        assert_eq!(board.empty_count(), 22);
    }

    #[test]
    fn full_width_seed() {
        let board = Board::new(5, "балда").unwrap();
        assert_eq!(board.snapshot()[2], vec!['Б', 'А', 'Л', 'Д', 'А']);
    }

    #[test]
    fn invalid_configurations() {
        assert!(matches!(
            Board::new(0, ""),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Board::new(3, "БАЛДА"),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Board::new(5, "CAT"),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(Board::new(MAX_BOARD_SIZE + 1, "").is_err());
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(
            Board::new(7, "ДОРОГА").unwrap(),
            Board::new(7, "ДОРОГА").unwrap()
        );
    }

    #[test]
    fn single_cell_board() {
        let empty = Board::new(1, "").unwrap();
        assert_eq!(empty.empty_count(), 1);
        assert!(!empty.is_full());

        let full = Board::new(1, "Я").unwrap();
        assert!(full.is_full());
        assert!(full.empty_cells().is_empty());
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        for size in 1..=6 {
            let board = Board::new(size, "").unwrap();
            let n = size as i32;
            for probe in [
                Position::new(-1, 0),
                Position::new(0, -1),
                Position::new(n, 0),
                Position::new(0, n),
                Position::new(-5, n + 3),
            ] {
                assert_eq!(board.get(probe), None, "size {size} probe {probe}");
            }
            assert_eq!(board.get(Position::new(0, 0)), Some(Cell::Empty));
        }
    }

    #[test]
    fn place_decrements_once_and_refuses_repeats() {
        let mut board = Board::new(3, "").unwrap();
        let pos = Position::new(1, 1);

        assert!(board.place(letter('А'), pos));
        assert_eq!(board.empty_count(), 8);

        assert!(!board.place(letter('Б'), pos));
        assert_eq!(board.empty_count(), 8);
        assert_eq!(board.letter_at(pos), Some(letter('А')));

        assert!(!board.place(letter('Б'), Position::new(3, 0)));
        assert_eq!(board.empty_count(), 8);
    }

    #[test]
    fn counter_tracks_empty_cells() {
        let mut board = Board::new(4, "ДОМ").unwrap();
        for pos in board.empty_cells() {
            assert!(board.place(letter('Я'), pos));
            let actual = board.positions().filter(|&p| board.get(p) == Some(Cell::Empty)).count();
            assert_eq!(board.empty_count(), actual);
        }
        assert!(board.is_full());
        assert_eq!(board.filled_count(), 16);
    }

    #[test]
    fn check_placement_reasons() {
        let board = Board::new(3, "КОТ").unwrap();
        assert_eq!(board.check_placement(Position::new(0, 0)), Ok(()));
        assert_eq!(
            board.check_placement(Position::new(1, 1)),
            Err(IllegalMove::Occupied(Position::new(1, 1)))
        );
        assert_eq!(
            board.check_placement(Position::new(0, 3)),
            Err(IllegalMove::OutOfBounds(Position::new(0, 3)))
        );
    }

    #[test]
    fn tentative_placement_reverts_on_drop() {
        let mut board = Board::new(3, "КОТ").unwrap();
        let before = board.clone();
        {
            let mut outer = board.tentative(letter('А'), Position::new(0, 0)).unwrap();
            assert_eq!(outer.empty_count(), 5);
            {
                let inner = outer.tentative(letter('Б'), Position::new(0, 1)).unwrap();
                assert_eq!(inner.empty_count(), 4);
                assert_eq!(inner.letter_at(Position::new(0, 0)), Some(letter('А')));
            }
            assert_eq!(outer.empty_count(), 5);
            assert!(outer.tentative(letter('В'), Position::new(1, 0)).is_none());
        }
        assert_eq!(board, before);
    }

    #[test]
    fn tentative_reverts_during_unwind() {
        let mut board = Board::new(3, "").unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = board.tentative(letter('А'), Position::new(2, 2)).unwrap();
            panic!("abandoned evaluation");
        }));
        assert!(result.is_err());
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.get(Position::new(2, 2)), Some(Cell::Empty));
    }

    #[test]
    fn from_rows_parses_grid() {
        let board = Board::from_rows(&["К.Т", ".О.", "..."]).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.empty_count(), 6);
        assert_eq!(board.letter_at(Position::new(1, 1)), Some(letter('О')));

        assert!(Board::from_rows(&["КО", "Т"]).is_err());
        assert!(Board::from_rows(&["K."]).is_err());
        assert!(Board::from_rows(&[]).is_err());
    }

    #[test]
    fn display_renders_rows() {
        let board = Board::new(3, "КОТ").unwrap();
        assert_eq!(board.to_string(), ". . .\nК О Т\n. . .");
    }
}
