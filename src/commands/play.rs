//! Play command
//!
//! Runs one bot match to completion.

use crate::core::{Board, GameError};
use crate::dictionary::Dictionary;
use crate::game::{Game, GameConfig, Move, Outcome};
use crate::strategy::StrategyType;
use std::time::{Duration, Instant};

/// Everything worth showing about a finished match
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub moves: Vec<Move>,
    pub board: Board,
    pub outcome: Outcome,
    /// Turns taken, skips included
    pub turns: usize,
    pub rejections: usize,
    pub duration: Duration,
}

/// Play a full match between bots
///
/// `on_move` sees every accepted move together with the board right after it.
///
/// # Errors
/// Returns `GameError::InvalidConfiguration` if the game cannot be set up.
pub fn run_match<F>(
    config: GameConfig,
    strategies: Vec<StrategyType>,
    dictionary: &Dictionary,
    on_move: F,
) -> Result<MatchReport, GameError>
where
    F: FnMut(&Move, &Board),
{
    let start = Instant::now();
    let mut game = Game::with_bots(config, dictionary, strategies)?;
    let outcome = game.play_out(on_move);

    Ok(MatchReport {
        moves: game.history().to_vec(),
        board: game.board().clone(),
        outcome,
        turns: game.turn(),
        rejections: game.rejections().len(),
        duration: start.elapsed(),
    })
}
