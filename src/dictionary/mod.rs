//! Dictionary for Balda
//!
//! A prefix tree over the Russian alphabet, wrapped in a read-only
//! [`Dictionary`] that players share.

mod embedded;
pub mod loader;
mod trie;
mod words;

pub use embedded::{WORDS, WORDS_COUNT};
pub use trie::{NodeId, PrefixNodes, Trie};
pub use words::Dictionary;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_cyrillic() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| ('а'..='я').contains(&c) || c == 'ё'),
                "Word '{word}' contains unexpected characters"
            );
        }
    }
}
