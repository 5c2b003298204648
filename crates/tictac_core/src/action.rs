//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::rules;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Places this move on the board after checking it is legal.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the board already has a result and
    /// [`MoveError::SquareOccupied`] if the square is taken. The board is
    /// left untouched on error.
    #[instrument(skip(board), fields(board = %board))]
    pub fn apply(&self, board: &mut Board) -> Result<(), MoveError> {
        if rules::outcome(board).is_over() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(self.position) {
            return Err(MoveError::SquareOccupied(self.position));
        }
        board.set(self.position, Square::Occupied(self.player));
        Ok(())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_places_mark() {
        let mut board = Board::new();
        Move::new(Player::X, Position::Center).apply(&mut board).unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_apply_rejects_occupied_square() {
        let mut board = Board::new();
        Move::new(Player::X, Position::Center).apply(&mut board).unwrap();
        let err = Move::new(Player::O, Position::Center)
            .apply(&mut board)
            .unwrap_err();
        assert_eq!(err, MoveError::SquareOccupied(Position::Center));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_apply_rejects_move_after_win() {
        let mut board: Board = "XXX/OO./...".parse().unwrap();
        let before = board;
        let err = Move::new(Player::O, Position::MiddleRight)
            .apply(&mut board)
            .unwrap_err();
        assert_eq!(err, MoveError::GameOver);
        assert_eq!(board, before);
    }
}
