//! Players and what drives them

use crate::core::{Board, GameError, Letter, Placement};
use crate::dictionary::Dictionary;
use crate::strategy::{MoveStrategy, StrategyType};
use std::collections::VecDeque;
use std::fmt;

/// Seat index of a player, stable for the whole game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub usize);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a player's placements come from
#[derive(Debug, Clone)]
pub enum Controller {
    /// A move strategy
    Bot(StrategyType),
    /// Placements supplied from outside, consumed front to back
    ///
    /// An empty queue means the player has nothing to offer this turn.
    Human(VecDeque<Placement>),
}

/// A seat in the game
///
/// Borrows the shared dictionary; the game only ever reads it.
#[derive(Debug, Clone)]
pub struct Player<'a> {
    id: PlayerId,
    name: String,
    score: usize,
    dictionary: &'a Dictionary,
    controller: Controller,
}

impl<'a> Player<'a> {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        dictionary: &'a Dictionary,
        controller: Controller,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            dictionary,
            controller,
        }
    }

    /// Bot player driven by `strategy`
    pub fn bot(
        id: PlayerId,
        name: impl Into<String>,
        dictionary: &'a Dictionary,
        strategy: StrategyType,
    ) -> Self {
        Self::new(id, name, dictionary, Controller::Bot(strategy))
    }

    /// Human player with an empty input queue
    pub fn human(id: PlayerId, name: impl Into<String>, dictionary: &'a Dictionary) -> Self {
        Self::new(id, name, dictionary, Controller::Human(VecDeque::new()))
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    pub(crate) const fn add_score(&mut self, points: usize) {
        self.score += points;
    }

    /// Letters this player may place
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        self.dictionary.letters()
    }

    #[must_use]
    pub fn may_place(&self, letter: Letter) -> bool {
        self.dictionary.allows(letter)
    }

    /// Queue a placement for a human player
    ///
    /// Returns `false` for bots, which take no input.
    pub fn push_input(&mut self, placement: Placement) -> bool {
        match &mut self.controller {
            Controller::Human(queue) => {
                queue.push_back(placement);
                true
            }
            Controller::Bot(_) => false,
        }
    }

    /// Ask for the next placement
    ///
    /// # Errors
    /// Returns `GameError::NoLegalMove` when the strategy finds nothing or
    /// the input queue is empty.
    pub fn propose(&mut self, board: &Board) -> Result<Placement, GameError> {
        let proposal = match &mut self.controller {
            Controller::Bot(strategy) => strategy.choose(board, self.dictionary),
            Controller::Human(queue) => queue.pop_front(),
        };
        proposal.ok_or(GameError::NoLegalMove)
    }
}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pts)", self.name, self.score)
    }
}
