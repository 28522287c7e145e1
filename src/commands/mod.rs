//! Command implementations

pub mod benchmark;
pub mod longest;
pub mod play;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use longest::{BoardSource, LongestResult, find_longest};
pub use play::{MatchReport, run_match};
