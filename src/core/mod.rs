//! Core domain types for Balda
//!
//! Letters, positions, the board and the error taxonomy. Nothing here knows
//! about dictionaries or players.

pub mod alphabet;
mod board;
mod error;
mod placement;
mod position;

pub use alphabet::{ALPHABET_SIZE, Letter};
pub use board::{Board, Cell, EMPTY_MARK, MAX_BOARD_SIZE, Tentative};
pub use error::{GameError, IllegalMove};
pub use placement::Placement;
pub use position::{DIRECTIONS, Position};
