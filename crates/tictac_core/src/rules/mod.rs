//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the move selector can call them on hypothetical boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{find_winner, LINES};

use super::{Board, GameOutcome};

/// Derives the outcome of a board.
///
/// A completed line wins even on a full board.
pub fn outcome(board: &Board) -> GameOutcome {
    match find_winner(board) {
        Some(player) => GameOutcome::Win(player),
        None if is_full(board) => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_outcome_in_progress_on_empty_board() {
        assert_eq!(outcome(&Board::new()), GameOutcome::InProgress);
    }

    #[test]
    fn test_outcome_prefers_win_on_full_board() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(outcome(&board), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_outcome_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }
}
