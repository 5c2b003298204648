//! Running score across games in a session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tictac_core::{GameOutcome, Player};
use tracing::{debug, instrument};

/// Wins and draws counted from the human's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Games the human won.
    human_wins: u32,
    /// Games the computer won.
    computer_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl ScoreTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. In-progress outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome, human: Player) {
        match outcome {
            GameOutcome::Win(player) if player == human => self.human_wins += 1,
            GameOutcome::Win(_) => self.computer_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => return,
        }
        debug!(tally = %self, "Recorded game");
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Human: {} | Computer: {} | Draws: {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}
