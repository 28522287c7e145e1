//! Balda
//!
//! Engine for the Balda word game: players take turns adding one letter to a
//! square grid and score the words they complete.
//!
//! # Quick Start
//!
//! ```rust
//! use balda::core::Board;
//! use balda::dictionary::Dictionary;
//! use balda::search::longest_word_path;
//!
//! let dict = Dictionary::from_words(["бал", "балда"]);
//! let board = Board::new(5, "балда").unwrap();
//!
//! let path = longest_word_path(&board, &dict).unwrap();
//! assert_eq!(path.word(), "БАЛДА");
//! ```

// Core domain types
pub mod core;

// Word storage
pub mod dictionary;

// Grid word search
pub mod search;

// Bot move selection
pub mod strategy;

// Turn loop and scoring
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
