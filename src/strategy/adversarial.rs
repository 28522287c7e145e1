//! Adversarial ("choke") strategy
//!
//! One-ply minimax: for each of our placements, find the opponent's best
//! greedy reply on the resulting board and pick the placement that leaves
//! the opponent the least.
//!
//! Cost per decision is `O(area² × letters²)` placement evaluations, each a
//! bounded grid search. A 5×5 board with the full alphabet is comfortable;
//! past roughly 8×8 decisions take seconds, and the evaluation count is
//! logged at debug level so slow turns are visible.

use super::MoveStrategy;
use super::greedy::best_for_cell;
use crate::core::{Board, Placement, Position};
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// One of our placements and the best score it leaves the opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub placement: Placement,
    /// Zero when the placement fills the board
    pub opponent_best: usize,
}

/// Minimizes the opponent's best immediate reply
///
/// Ties keep the first candidate in scan order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdversarialStrategy;

impl AdversarialStrategy {
    /// Every candidate placement with its opponent-best score
    ///
    /// Ordered by cell (row-major), then letter. Outer cells are evaluated in
    /// parallel, each worker simulating on its own copy of the board.
    #[must_use]
    pub fn evaluate(board: &Board, dictionary: &Dictionary) -> Vec<Candidate> {
        let cells = board.empty_cells();
        let letters = dictionary.letters().len();
        log::debug!(
            "adversarial: {} candidates, up to {} replies each",
            cells.len() * letters,
            cells.len().saturating_sub(1) * letters
        );

        cells
            .par_iter()
            .map_init(
                || board.clone(),
                |scratch, &cell| candidates_for_cell(scratch, dictionary, cell),
            )
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Candidate with the smallest opponent-best score, `None` if the board is full
    #[must_use]
    pub fn best(board: &Board, dictionary: &Dictionary) -> Option<Candidate> {
        Self::evaluate(board, dictionary)
            .into_iter()
            .fold(None, |best, candidate| match best {
                Some(kept) if kept.opponent_best <= candidate.opponent_best => Some(kept),
                _ => Some(candidate),
            })
    }
}

impl MoveStrategy for AdversarialStrategy {
    fn choose(&mut self, board: &Board, dictionary: &Dictionary) -> Option<Placement> {
        let best = Self::best(board, dictionary)?;
        log::debug!(
            "adversarial picks {} (opponent best {})",
            best.placement,
            best.opponent_best
        );
        Some(best.placement)
    }
}

fn candidates_for_cell(
    scratch: &mut Board,
    dictionary: &Dictionary,
    cell: Position,
) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(dictionary.letters().len());
    for &letter in dictionary.letters() {
        let Some(mut trial) = scratch.tentative(letter, cell) else {
            continue;
        };
        let opponent_best = opponent_best(&mut trial, dictionary);
        out.push(Candidate {
            placement: Placement::new(cell, letter),
            opponent_best,
        });
    }
    out
}

/// Best greedy score available to the player moving next
fn opponent_best(board: &mut Board, dictionary: &Dictionary) -> usize {
    board
        .empty_cells()
        .into_iter()
        .filter_map(|reply| best_for_cell(board, dictionary, reply))
        .map(|scored| scored.score)
        .max()
        .unwrap_or(0)
}
