//! Benchmark command
//!
//! Plays a series of matches between two strategies, swapping who moves first
//! every game.

use crate::core::GameError;
use crate::dictionary::Dictionary;
use crate::game::{Game, GameConfig};
use crate::strategy::StrategyType;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Settings for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub game: GameConfig,
    /// Strategy names, see [`StrategyType::from_name`]
    pub contenders: [String; 2],
    pub games: usize,
    /// Base seed for random strategies; game `i` uses `seed + i`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub contenders: [String; 2],
    pub games: usize,
    pub wins: [usize; 2],
    pub draws: usize,
    pub total_scores: [usize; 2],
    pub total_moves: usize,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn average_score(&self, contender: usize) -> f64 {
        ratio(self.total_scores[contender], self.games)
    }

    #[must_use]
    pub fn win_rate(&self, contender: usize) -> f64 {
        ratio(self.wins[contender], self.games)
    }

    #[must_use]
    pub fn average_moves(&self) -> f64 {
        ratio(self.total_moves, self.games)
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.games as f64 / secs
        } else {
            0.0
        }
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Run `config.games` matches and tally the results
///
/// # Errors
/// Returns `GameError::InvalidConfiguration` if the game settings are invalid.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    dictionary: &Dictionary,
) -> Result<BenchmarkResult, GameError> {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut result = BenchmarkResult {
        contenders: config.contenders.clone(),
        games: config.games,
        wins: [0; 2],
        draws: 0,
        total_scores: [0; 2],
        total_moves: 0,
        duration: Duration::ZERO,
    };
    let start = Instant::now();

    for index in 0..config.games {
        // contender at seat 0 alternates
        let order = if index % 2 == 0 { [0, 1] } else { [1, 0] };
        let strategies = order
            .iter()
            .map(|&c| {
                let strategy = StrategyType::from_name(&config.contenders[c]);
                match config.seed {
                    Some(seed) => strategy.with_seed(seed.wrapping_add(index as u64)),
                    None => strategy,
                }
            })
            .collect();

        let mut game = Game::with_bots(config.game.clone(), dictionary, strategies)?;
        let outcome = game.play_out(|_, _| {});
        result.total_moves += game.history().len();
        for (seat, standing) in outcome.standings.iter().enumerate() {
            result.total_scores[order[seat]] += standing.score;
        }
        if outcome.is_draw() {
            result.draws += 1;
        } else {
            result.wins[order[outcome.winner.0]] += 1;
        }

        log::debug!("game {}: winner seat {}", index + 1, outcome.winner);
        pb.set_message(format!(
            "{} {} : {} {}",
            config.contenders[0], result.wins[0], result.wins[1], config.contenders[1]
        ));
        pb.inc(1);
    }

    pb.finish_and_clear();
    result.duration = start.elapsed();
    Ok(result)
}
