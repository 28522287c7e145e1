//! Greedy strategy
//!
//! Tries every allowed letter in every empty cell and keeps the placement whose
//! best path through the new letter scores highest.

use super::MoveStrategy;
use crate::core::{Board, Placement, Position};
use crate::dictionary::Dictionary;
use crate::search::placement_score;
use rayon::prelude::*;

/// A candidate placement with its evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPlacement {
    pub placement: Placement,
    pub score: usize,
}

/// Maximizes the immediate placement score
///
/// Ties keep the first candidate in scan order: cells row-major, letters in
/// alphabet order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    /// Best placement for every empty cell, in row-major order
    ///
    /// Cells are evaluated in parallel, each worker on its own copy of the
    /// board.
    #[must_use]
    pub fn evaluate(board: &Board, dictionary: &Dictionary) -> Vec<ScoredPlacement> {
        board
            .empty_cells()
            .par_iter()
            .map_init(
                || board.clone(),
                |scratch, &cell| best_for_cell(scratch, dictionary, cell),
            )
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Highest-scoring placement, `None` if the board is full
    ///
    /// # Examples
    /// ```
    /// use balda::core::{Board, Position};
    /// use balda::dictionary::Dictionary;
    /// use balda::strategy::GreedyStrategy;
    ///
    /// let dict = Dictionary::from_words(["кот", "от"]);
    /// let board = Board::from_rows(&["К.Т", "...", "..."]).unwrap();
    /// let best = GreedyStrategy::best(&board, &dict).unwrap();
    /// assert_eq!(best.placement.position, Position::new(0, 1));
    /// assert_eq!(best.score, 9);
    /// ```
    #[must_use]
    pub fn best(board: &Board, dictionary: &Dictionary) -> Option<ScoredPlacement> {
        first_max(Self::evaluate(board, dictionary))
    }
}

impl MoveStrategy for GreedyStrategy {
    fn choose(&mut self, board: &Board, dictionary: &Dictionary) -> Option<Placement> {
        let best = Self::best(board, dictionary)?;
        log::debug!("greedy picks {} (score {})", best.placement, best.score);
        Some(best.placement)
    }
}

/// Highest-scoring letter for one cell, first letter on ties
pub(crate) fn best_for_cell(
    scratch: &mut Board,
    dictionary: &Dictionary,
    cell: Position,
) -> Option<ScoredPlacement> {
    let mut best: Option<ScoredPlacement> = None;
    for &letter in dictionary.letters() {
        let Some(trial) = scratch.tentative(letter, cell) else {
            continue;
        };
        let score = placement_score(&trial, dictionary, cell);
        if best.is_none_or(|b| score > b.score) {
            best = Some(ScoredPlacement {
                placement: Placement::new(cell, letter),
                score,
            });
        }
    }
    best
}

/// First candidate holding the maximum score
pub(crate) fn first_max<I>(candidates: I) -> Option<ScoredPlacement>
where
    I: IntoIterator<Item = ScoredPlacement>,
{
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(kept) if kept.score >= candidate.score => Some(kept),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn l(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn completes_a_word() {
        // only К and О begin words, so only they are tried
        let dict = Dictionary::from_words(["КОТ", "ОТ"]);
        let board = Board::from_rows(&["...", "К.Т", "..."]).unwrap();
        let best = GreedyStrategy::best(&board, &dict).unwrap();
        assert_eq!(best.placement, Placement::new(Position::new(1, 1), l('О')));
        assert_eq!(best.score, 9);
    }

    #[test]
    fn prefers_longer_word() {
        // Б А Л . А: Д completes БАЛДА (15) rather than ДА (6)
        let dict = Dictionary::from_words(["БАЛ", "БАЛДА", "ДА"]);
        let board = Board::from_rows(&[".....", ".....", "БАЛ.А", ".....", "....."]).unwrap();
        let best = GreedyStrategy::best(&board, &dict).unwrap();
        assert_eq!(best.placement, Placement::new(Position::new(2, 3), l('Д')));
        assert_eq!(best.score, 15);
    }

    #[test]
    fn ties_keep_scan_order() {
        // Т on any side of О spells ОТ or ТО for 6; (0,1) comes first
        let dict = Dictionary::from_words(["ОТ", "ТО"]);
        let board = Board::from_rows(&["...", ".О.", "..."]).unwrap();
        let best = GreedyStrategy::best(&board, &dict).unwrap();
        assert_eq!(best.placement, Placement::new(Position::new(0, 1), l('Т')));
        assert_eq!(best.score, 6);
    }

    #[test]
    fn never_targets_occupied_cells() {
        let dict = Dictionary::embedded();
        let board = Board::new(5, "БАЛДА").unwrap();
        for scored in GreedyStrategy::evaluate(&board, &dict) {
            assert_eq!(board.check_placement(scored.placement.position), Ok(()));
        }
    }

    #[test]
    fn evaluation_leaves_board_untouched() {
        let dict = Dictionary::from_words(["КОТ"]);
        let board = Board::new(3, "КО").unwrap();
        let before = board.clone();
        let _ = GreedyStrategy::evaluate(&board, &dict);
        assert_eq!(board, before);
    }

    #[test]
    fn full_board_gives_no_move() {
        let dict = Dictionary::from_words(["КОТ"]);
        let board = Board::from_rows(&["КО", "ТК"]).unwrap();
        let mut strategy = GreedyStrategy;
        assert!(strategy.choose(&board, &dict).is_none());
    }

    #[test]
    fn first_max_keeps_earliest() {
        let p = |col| Placement::new(Position::new(0, col), l('А'));
        let picked = first_max([
            ScoredPlacement { placement: p(0), score: 1 },
            ScoredPlacement { placement: p(1), score: 4 },
            ScoredPlacement { placement: p(2), score: 4 },
        ])
        .unwrap();
        assert_eq!(picked.placement, p(1));
        assert!(first_max(Vec::new()).is_none());
    }
}
