//! Grid word search
//!
//! Branch-and-bound discovery of dictionary words along adjacent cells. Shared
//! by the game's scoring and by the Greedy and Adversarial strategies.

mod grid;
mod path;

pub use grid::{
    best_path_through, longest_word, longest_word_path, longest_word_through, placement_score,
};
pub use path::{TERMINAL_BONUS, WordPath, path_score};
