//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_board, print_longest, print_match_report, print_move,
    print_outcome,
};
