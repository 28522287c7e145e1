//! Move selection strategies
//!
//! Defines the `MoveStrategy` trait and the runtime-selectable wrapper.

use super::{AdversarialStrategy, GreedyStrategy, RandomStrategy};
use crate::core::{Board, Placement};
use crate::dictionary::Dictionary;

/// A policy for choosing the next letter placement
pub trait MoveStrategy {
    /// Propose a placement for the current board
    ///
    /// The board is only read; any trial placements are undone before
    /// returning. Returns `None` when there is nothing to propose, e.g. the
    /// board is full or the dictionary allows no letters.
    fn choose(&mut self, board: &Board, dictionary: &Dictionary) -> Option<Placement>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Uniform random placement (easy bot)
    Random(RandomStrategy),
    /// Best immediate score (default)
    Greedy(GreedyStrategy),
    /// Minimize the opponent's best reply
    Adversarial(AdversarialStrategy),
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Greedy(GreedyStrategy)
    }
}

impl MoveStrategy for StrategyType {
    fn choose(&mut self, board: &Board, dictionary: &Dictionary) -> Option<Placement> {
        match self {
            Self::Random(s) => s.choose(board, dictionary),
            Self::Greedy(s) => s.choose(board, dictionary),
            Self::Adversarial(s) => s.choose(board, dictionary),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "easy", "greedy", "hard", "adversarial", "choke".
    /// Defaults to greedy if name is unrecognized.
    ///
    /// # Examples
    /// ```
    /// use balda::strategy::StrategyType;
    ///
    /// assert_eq!(StrategyType::from_name("easy").name(), "random");
    /// assert_eq!(StrategyType::from_name("CHOKE").name(), "adversarial");
    /// assert_eq!(StrategyType::from_name("nonsense").name(), "greedy");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" => Self::Random(RandomStrategy::new()),
            "greedy" | "hard" => Self::Greedy(GreedyStrategy),
            "adversarial" | "choke" => Self::Adversarial(AdversarialStrategy),
            other => {
                log::warn!("unknown strategy '{other}', using greedy");
                Self::default()
            }
        }
    }

    /// Make random play reproducible; other strategies are deterministic already
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        match self {
            Self::Random(_) => Self::Random(RandomStrategy::seeded(seed)),
            other => other,
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Greedy(_) => "greedy",
            Self::Adversarial(_) => "adversarial",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in ["random", "greedy", "adversarial"] {
            assert_eq!(StrategyType::from_name(name).name(), name);
        }
        assert_eq!(StrategyType::from_name(" Hard ").name(), "greedy");
    }

    #[test]
    fn default_is_greedy() {
        assert_eq!(StrategyType::default().name(), "greedy");
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let dict = Dictionary::from_words(["КОТ", "ДОМ", "ГОРА"]);
        let board = Board::new(5, "ГОРА").unwrap();
        let mut a = StrategyType::from_name("random").with_seed(11);
        let mut b = StrategyType::from_name("easy").with_seed(11);
        for _ in 0..5 {
            assert_eq!(a.choose(&board, &dict), b.choose(&board, &dict));
        }
        assert_eq!(StrategyType::from_name("greedy").with_seed(11).name(), "greedy");
    }

    #[test]
    fn wrapper_dispatches() {
        let dict = Dictionary::from_words(["КОТ", "ОТ"]);
        let board = Board::from_rows(&["...", "К.Т", "..."]).unwrap();
        let mut wrapped = StrategyType::from_name("greedy");
        let direct = GreedyStrategy.choose(&board, &dict);
        assert_eq!(wrapped.choose(&board, &dict), direct);
    }

    #[test]
    fn every_strategy_stops_on_full_board() {
        let dict = Dictionary::from_words(["КОТ"]);
        let board = Board::from_rows(&["КО", "ТК"]).unwrap();
        for name in ["random", "greedy", "adversarial"] {
            let mut strategy = StrategyType::from_name(name);
            assert!(strategy.choose(&board, &dict).is_none(), "{name}");
        }
    }
}
