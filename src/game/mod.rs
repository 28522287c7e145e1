//! Game state machine
//!
//! Players, accepted moves, rule configuration and the turn loop.

mod config;
mod engine;
mod moves;
mod player;

pub use config::{GameConfig, RejectionPolicy, WinnerPolicy};
pub use engine::{Game, GameState, Outcome, Rejection, Standing, Turn, Turns};
pub use moves::Move;
pub use player::{Controller, Player, PlayerId};
