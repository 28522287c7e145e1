//! Game configuration

/// What happens when a player proposes an illegal placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionPolicy {
    /// Ask the same player again, at most `attempts` more times, then forfeit
    Retry { attempts: usize },
    /// The turn passes immediately
    Forfeit,
}

impl Default for RejectionPolicy {
    fn default() -> Self {
        Self::Retry { attempts: 3 }
    }
}

impl RejectionPolicy {
    /// Total proposals a player gets per turn
    #[must_use]
    pub const fn proposals(self) -> usize {
        match self {
            Self::Retry { attempts } => attempts.saturating_add(1),
            Self::Forfeit => 1,
        }
    }
}

/// How the winner is picked from the final scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WinnerPolicy {
    /// First player holding the top score
    #[default]
    HighestScore,
    /// First player scoring strictly more than the next seat, else seat 0
    ///
    /// Not a true maximum: with scores `[1, 2, 0]` seat 1 wins, with
    /// `[1, 3, 5]` seat 0 does.
    AdjacentPairwise,
}

impl WinnerPolicy {
    /// Seat index of the winner, `None` for an empty score list
    #[must_use]
    pub fn pick(self, scores: &[usize]) -> Option<usize> {
        if scores.is_empty() {
            return None;
        }
        let winner = match self {
            Self::HighestScore => scores
                .iter()
                .enumerate()
                .fold(0, |best, (i, &s)| if s > scores[best] { i } else { best }),
            Self::AdjacentPairwise => scores
                .windows(2)
                .position(|pair| pair[0] > pair[1])
                .unwrap_or(0),
        };
        Some(winner)
    }
}

/// Board and rule settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub seed_word: String,
    pub rejection: RejectionPolicy,
    pub winner: WinnerPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(5, "БАЛДА")
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(size: usize, seed_word: impl Into<String>) -> Self {
        Self {
            size,
            seed_word: seed_word.into(),
            rejection: RejectionPolicy::default(),
            winner: WinnerPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_rejection(mut self, rejection: RejectionPolicy) -> Self {
        self.rejection = rejection;
        self
    }

    #[must_use]
    pub const fn with_winner(mut self, winner: WinnerPolicy) -> Self {
        self.winner = winner;
        self
    }
}
