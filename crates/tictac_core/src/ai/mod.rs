//! Computer move selection.
//!
//! [`Difficulty::Easy`] picks a uniformly random empty square.
//! [`Difficulty::Hard`] runs an exhaustive minimax search and never loses.

pub mod minimax;
pub mod random;

pub use minimax::{ScoredMove, WIN_SCORE};

use crate::{Board, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strategy used by the move selector.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    #[default]
    Easy,
    /// Optimal move by exhaustive minimax.
    Hard,
}

/// Result of a full search from one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Chosen square.
    pub best: Position,
    /// Minimax score of the chosen square.
    pub score: i32,
    /// Positions visited by the search.
    pub nodes: u64,
    /// Every legal move with its score, row-major.
    pub moves: Vec<ScoredMove>,
}

/// Picks moves for the computer's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSelector {
    computer: Player,
}

impl Default for MoveSelector {
    /// The computer plays O against a human X.
    fn default() -> Self {
        Self::new(Player::O)
    }
}

impl MoveSelector {
    /// Creates a selector playing `computer`'s mark.
    pub fn new(computer: Player) -> Self {
        Self { computer }
    }

    /// The mark this selector plays.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Chooses the computer's next move.
    ///
    /// Returns `None` only when the board has no empty square. The board is
    /// never modified; the caller applies the returned move.
    #[instrument(skip(self, board, rng), fields(computer = %self.computer, board = %board))]
    pub fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Option<Position> {
        let choice = match difficulty {
            Difficulty::Easy => random::random_move(board, rng),
            Difficulty::Hard => self.analyze(board).map(|analysis| analysis.best),
        };
        debug!(?choice, "Selected move");
        choice
    }

    /// Minimax score of every legal move, row-major.
    pub fn score_moves(&self, board: &Board) -> Vec<ScoredMove> {
        minimax::score_moves(board, self.computer).0
    }

    /// Runs the full search and reports the chosen move.
    ///
    /// Ties go to the first square in row-major order.
    #[instrument(skip(self, board), fields(computer = %self.computer, board = %board))]
    pub fn analyze(&self, board: &Board) -> Option<Analysis> {
        let (moves, nodes) = minimax::score_moves(board, self.computer);
        let best = minimax::best_of(&moves)?;
        debug!(best = %best.position, score = best.score, nodes, "Search complete");
        Some(Analysis {
            best: best.position,
            score: best.score,
            nodes,
            moves,
        })
    }
}

/// Chooses a move for the default computer mark (O).
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    MoveSelector::default().select_move(board, difficulty, rng)
}
