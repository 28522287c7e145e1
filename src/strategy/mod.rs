//! Bot move selection
//!
//! Three policies share one trait: random, greedy and adversarial.

pub mod adversarial;
pub mod greedy;
pub mod phonetic;
mod policy;
pub mod random;

pub use adversarial::{AdversarialStrategy, Candidate};
pub use greedy::{GreedyStrategy, ScoredPlacement};
pub use phonetic::PhoneticEncoder;
pub use policy::{MoveStrategy, StrategyType};
pub use random::RandomStrategy;
