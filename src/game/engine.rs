//! Turn-based state machine
//!
//! Players move round-robin. A player either gets a placement accepted, or
//! runs out of proposals and skips. The game is over once the board is full
//! or every player has skipped in a row.

use super::config::GameConfig;
use super::moves::Move;
use super::player::{Player, PlayerId};
use crate::core::{Board, GameError, IllegalMove, Placement};
use crate::dictionary::Dictionary;
use crate::search::longest_word_through;
use crate::strategy::StrategyType;
use rustc_hash::FxHashSet;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Over,
}

/// Result of one call to [`Game::play_turn`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Played(Move),
    Skipped(PlayerId),
}

/// A refused proposal, kept for inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub player: PlayerId,
    pub placement: Placement,
    pub reason: IllegalMove,
}

/// Final score of one seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: usize,
}

/// Winner and final scores of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub winner: PlayerId,
    /// In seat order
    pub standings: Vec<Standing>,
}

impl Outcome {
    #[must_use]
    pub fn winner_standing(&self) -> Option<&Standing> {
        self.standings.get(self.winner.0)
    }

    #[must_use]
    pub fn top_score(&self) -> usize {
        self.standings.iter().map(|s| s.score).max().unwrap_or(0)
    }

    /// Whether more than one seat holds the top score
    #[must_use]
    pub fn is_draw(&self) -> bool {
        let top = self.top_score();
        self.standings.iter().filter(|s| s.score == top).count() > 1
    }
}

/// One game of Balda
pub struct Game<'a> {
    config: GameConfig,
    board: Board,
    dictionary: &'a Dictionary,
    players: Vec<Player<'a>>,
    state: GameState,
    turn: usize,
    skips: usize,
    claimed: FxHashSet<String>,
    history: Vec<Move>,
    rejections: Vec<Rejection>,
}

impl<'a> Game<'a> {
    /// Set up a game
    ///
    /// The seed word counts as already claimed.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if:
    /// - there are no players
    /// - a player's id does not match its seat index
    /// - the board cannot be built from `config`
    pub fn new(
        config: GameConfig,
        dictionary: &'a Dictionary,
        players: Vec<Player<'a>>,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "a game needs at least one player".to_string(),
            ));
        }
        if let Some((seat, player)) = players
            .iter()
            .enumerate()
            .find(|(seat, p)| p.id() != PlayerId(*seat))
        {
            return Err(GameError::InvalidConfiguration(format!(
                "player {} sits at seat {seat}",
                player.id()
            )));
        }

        let board = Board::new(config.size, &config.seed_word)?;
        let mut claimed = FxHashSet::default();
        let seed = config.seed_word.trim().to_uppercase();
        if !seed.is_empty() {
            claimed.insert(seed);
        }

        let state = if board.is_full() {
            GameState::Over
        } else {
            GameState::InProgress
        };

        log::debug!(
            "new game: {}x{} board, {} players, seed '{}'",
            config.size,
            config.size,
            players.len(),
            config.seed_word
        );

        Ok(Self {
            config,
            board,
            dictionary,
            players,
            state,
            turn: 0,
            skips: 0,
            claimed,
            history: Vec::new(),
            rejections: Vec::new(),
        })
    }

    /// Game between bots named "Bot 1", "Bot 2", ...
    ///
    /// # Errors
    /// Same as [`Game::new`].
    pub fn with_bots(
        config: GameConfig,
        dictionary: &'a Dictionary,
        strategies: Vec<StrategyType>,
    ) -> Result<Self, GameError> {
        let players = strategies
            .into_iter()
            .enumerate()
            .map(|(seat, strategy)| {
                Player::bot(PlayerId(seat), format!("Bot {}", seat + 1), dictionary, strategy)
            })
            .collect();
        Self::new(config, dictionary, players)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        self.dictionary
    }

    #[must_use]
    pub fn players(&self) -> &[Player<'a>] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player<'a>> {
        self.players.get(id.0)
    }

    /// Queue a placement for a human seat
    ///
    /// Returns `false` for unknown seats and bots.
    pub fn push_input(&mut self, id: PlayerId, placement: Placement) -> bool {
        self.players
            .get_mut(id.0)
            .is_some_and(|player| player.push_input(placement))
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::Over)
    }

    /// Turns taken so far, skips included
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Consecutive skips since the last accepted move
    #[must_use]
    pub const fn skips(&self) -> usize {
        self.skips
    }

    /// Seat due to move next
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId(self.turn % self.players.len())
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Whether `word` has been claimed (or is the seed)
    #[must_use]
    pub fn is_claimed(&self, word: &str) -> bool {
        self.claimed.contains(word)
    }

    /// Lazy sequence of accepted moves
    ///
    /// Reading it drives the game; skipped turns are played but not yielded.
    /// Ends when the game is over.
    pub fn turns(&mut self) -> Turns<'_, 'a> {
        Turns { game: self }
    }

    /// Play one turn, `None` once the game is over
    pub fn play_turn(&mut self) -> Option<Turn> {
        if self.is_over() {
            return None;
        }

        let seat = self.turn % self.players.len();
        let id = PlayerId(seat);
        log::debug!("turn {}: {} to move", self.turn, self.players[seat].name());

        for _ in 0..self.config.rejection.proposals() {
            let placement = match self.players[seat].propose(&self.board) {
                Ok(placement) => placement,
                Err(err) => {
                    log::debug!("{} has no move: {err}", self.players[seat].name());
                    return Some(self.skip(id));
                }
            };

            match self.validate(seat, placement) {
                Ok(()) => return Some(Turn::Played(self.apply(seat, placement))),
                Err(reason) => {
                    log::warn!(
                        "rejected {placement} from {}: {reason}",
                        self.players[seat].name()
                    );
                    self.rejections.push(Rejection {
                        player: id,
                        placement,
                        reason,
                    });
                }
            }
        }

        log::info!("{} forfeits the turn", self.players[seat].name());
        Some(self.skip(id))
    }

    fn validate(&self, seat: usize, placement: Placement) -> Result<(), IllegalMove> {
        self.board.check_placement(placement.position)?;
        if !self.players[seat].may_place(placement.letter) {
            return Err(IllegalMove::LetterNotAllowed(placement.letter));
        }
        Ok(())
    }

    fn apply(&mut self, seat: usize, placement: Placement) -> Move {
        let placed = self.board.place(placement.letter, placement.position);
        debug_assert!(placed, "validated placement must succeed");

        let word = longest_word_through(
            &self.board,
            self.dictionary,
            placement.position,
            &self.claimed,
        );
        let player = &mut self.players[seat];
        if let Some(path) = &word {
            player.add_score(path.len());
            self.claimed.insert(path.word().to_string());
        }

        let accepted = Move {
            player: player.id(),
            player_name: player.name().to_string(),
            placement,
            word,
        };
        log::info!("{accepted}");

        self.skips = 0;
        self.turn += 1;
        self.history.push(accepted.clone());
        if self.board.is_full() {
            self.finish("board is full");
        }
        accepted
    }

    fn skip(&mut self, id: PlayerId) -> Turn {
        self.skips += 1;
        self.turn += 1;
        if self.skips >= self.players.len() {
            self.finish("every player skipped");
        }
        Turn::Skipped(id)
    }

    fn finish(&mut self, reason: &str) {
        self.state = GameState::Over;
        if let Some(outcome) = self.outcome() {
            let name = outcome.winner_standing().map_or("", |s| s.name.as_str());
            log::info!("game over ({reason}), winner: {name}");
        }
    }

    /// Play every remaining turn and return the result
    ///
    /// `on_move` sees each accepted move together with the board right after it.
    pub fn play_out<F>(&mut self, mut on_move: F) -> Outcome
    where
        F: FnMut(&Move, &Board),
    {
        while let Some(turn) = self.play_turn() {
            if let Turn::Played(accepted) = turn {
                on_move(&accepted, &self.board);
            }
        }
        self.tally()
    }

    /// Winner and scores, `None` while the game is in progress
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| self.tally())
    }

    /// Hand the players back, final scores included
    #[must_use]
    pub fn into_players(self) -> Vec<Player<'a>> {
        self.players
    }

    fn tally(&self) -> Outcome {
        let scores: Vec<usize> = self.players.iter().map(Player::score).collect();
        // `new` rejects an empty seat list
        let winner = self.config.winner.pick(&scores).unwrap_or_default();
        let standings = self
            .players
            .iter()
            .map(|p| Standing {
                player: p.id(),
                name: p.name().to_string(),
                score: p.score(),
            })
            .collect();
        Outcome {
            winner: PlayerId(winner),
            standings,
        }
    }
}

/// Iterator over accepted moves, see [`Game::turns`]
pub struct Turns<'g, 'a> {
    game: &'g mut Game<'a>,
}

impl Iterator for Turns<'_, '_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            match self.game.play_turn()? {
                Turn::Played(accepted) => return Some(accepted),
                Turn::Skipped(_) => {}
            }
        }
    }
}

impl FusedIterator for Turns<'_, '_> {}
