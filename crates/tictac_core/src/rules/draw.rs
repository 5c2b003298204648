//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::find_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game ended in a draw.
///
/// A full board with a completed line is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_winner(board).is_none()
}
