//! Random strategy
//!
//! Picks a random empty cell and a random allowed letter, then lets the
//! phonetic heuristic nudge the letter toward one already on the board.

use super::phonetic::{PhoneticEncoder, board_tokens};
use super::MoveStrategy;
use crate::core::{Board, Placement};
use crate::dictionary::Dictionary;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Uniformly random placement with a phonetic letter bias
///
/// The letter is drawn from the dictionary's allowed alphabet. If a word on
/// the board opens with a similar sound, that word's first letter is used
/// instead (only tokens whose first letter is itself allowed count).
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
    phonetic: PhoneticEncoder,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomStrategy {
    /// Random strategy seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            phonetic: PhoneticEncoder::default(),
        }
    }

    /// Reproducible random strategy
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            phonetic: PhoneticEncoder::default(),
        }
    }

    /// Replace the phonetic heuristic
    #[must_use]
    pub fn with_phonetic(mut self, phonetic: PhoneticEncoder) -> Self {
        self.phonetic = phonetic;
        self
    }
}

impl MoveStrategy for RandomStrategy {
    fn choose(&mut self, board: &Board, dictionary: &Dictionary) -> Option<Placement> {
        let empty = board.empty_cells();
        let &position = empty.choose(&mut self.rng)?;
        let &candidate = dictionary.letters().choose(&mut self.rng)?;

        let tokens: Vec<_> = board_tokens(board)
            .into_iter()
            .filter(|token| token.first().is_some_and(|&first| dictionary.allows(first)))
            .collect();
        let letter = self.phonetic.echo(candidate, &tokens).unwrap_or(candidate);

        if letter != candidate {
            log::trace!("random letter {candidate} echoed as {letter}");
        }
        Some(Placement::new(position, letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Position};

    fn dict() -> Dictionary {
        Dictionary::from_words(["КОТ", "ДОМ", "ГОРА", "ЯМА"])
    }

    #[test]
    fn full_board_gives_no_move() {
        let board = Board::from_rows(&["КО", "ТЫ"]).unwrap();
        assert!(board.is_full());
        let mut strategy = RandomStrategy::seeded(7);
        assert!(strategy.choose(&board, &dict()).is_none());
    }

    #[test]
    fn empty_dictionary_gives_no_move() {
        let board = Board::new(3, "").unwrap();
        let mut strategy = RandomStrategy::seeded(7);
        let empty = Dictionary::from_words(Vec::<&str>::new());
        assert!(strategy.choose(&board, &empty).is_none());
    }

    #[test]
    fn proposes_empty_cell_and_allowed_letter() {
        let dict = dict();
        let mut board = Board::new(4, "ГОРА").unwrap();
        let mut strategy = RandomStrategy::seeded(42);

        while !board.is_full() {
            let placement = strategy.choose(&board, &dict).unwrap();
            assert_eq!(board.check_placement(placement.position), Ok(()));
            assert!(dict.allows(placement.letter), "{placement}");
            assert!(board.place(placement.letter, placement.position));
        }
        assert!(strategy.choose(&board, &dict).is_none());
    }

    #[test]
    fn same_seed_same_moves() {
        let dict = dict();
        let board = Board::new(5, "ДОМ").unwrap();
        let mut a = RandomStrategy::seeded(99);
        let mut b = RandomStrategy::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.choose(&board, &dict), b.choose(&board, &dict));
        }
    }

    #[test]
    fn only_cell_is_chosen() {
        let board = Board::from_rows(&["КОТ", "ДОМ", "ЯМ."]).unwrap();
        let mut strategy = RandomStrategy::seeded(1);
        let placement = strategy.choose(&board, &dict()).unwrap();
        assert_eq!(placement.position, Position::new(2, 2));
    }

    #[test]
    fn letters_echo_board_sounds() {
        // Every allowed letter shares a class under this table, so the echo
        // always picks the first allowed token's leading letter.
        let dict = dict();
        let board = Board::new(5, "ГОРА").unwrap();
        let mut strategy =
            RandomStrategy::seeded(3).with_phonetic(PhoneticEncoder::new([1; crate::core::ALPHABET_SIZE]));
        for _ in 0..5 {
            let placement = strategy.choose(&board, &dict).unwrap();
            assert_eq!(placement.letter, Letter::from_char('Г').unwrap());
        }
    }
}
