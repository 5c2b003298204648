//! Exhaustive minimax search.
//!
//! The full tic-tac-toe tree has at most 9! leaves, so the search visits
//! every continuation with no pruning and no memoization. Each ply works on
//! its own copy of the board; the caller's board is never written.
//!
//! This does not scale past 3x3: a larger board needs alpha-beta pruning or
//! memoized position values before it is usable.

use crate::rules;
use crate::{Board, GameOutcome, Player, Position};
use serde::{Deserialize, Serialize};

/// Score of a win reached with no further plies.
pub const WIN_SCORE: i32 = 10;

/// Minimax score of a single candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Square the computer would take.
    pub position: Position,
    /// Value of the resulting position for the computer.
    pub score: i32,
}

struct Search {
    computer: Player,
    nodes: u64,
}

impl Search {
    fn new(computer: Player) -> Self {
        Self { computer, nodes: 0 }
    }

    /// Terminal boards score `10 - depth` for a computer win, `depth - 10`
    /// for a human win and 0 for a draw, so faster wins and slower losses
    /// rank higher.
    fn evaluate(&mut self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        match rules::outcome(board) {
            GameOutcome::Win(player) if player == self.computer => return WIN_SCORE - depth,
            GameOutcome::Win(_) => return depth - WIN_SCORE,
            GameOutcome::Draw => return 0,
            GameOutcome::InProgress => {}
        }

        if maximizing {
            let mut best = i32::MIN;
            for pos in board.empty_positions() {
                let next = board.with_mark(pos, self.computer);
                best = best.max(self.evaluate(&next, depth + 1, false));
            }
            best
        } else {
            let human = self.computer.opponent();
            let mut best = i32::MAX;
            for pos in board.empty_positions() {
                let next = board.with_mark(pos, human);
                best = best.min(self.evaluate(&next, depth + 1, true));
            }
            best
        }
    }
}

/// Minimax value of `board` for `computer`.
///
/// `depth` is the number of hypothetical plies already placed and
/// `maximizing` is true when the computer is to move.
pub fn evaluate(board: &Board, depth: i32, maximizing: bool, computer: Player) -> i32 {
    Search::new(computer).evaluate(board, depth, maximizing)
}

/// Scores every legal move for `computer` in row-major order.
///
/// Returns the scores and the number of positions visited.
pub fn score_moves(board: &Board, computer: Player) -> (Vec<ScoredMove>, u64) {
    let mut search = Search::new(computer);
    let scored = board
        .empty_positions()
        .map(|position| {
            let next = board.with_mark(position, computer);
            ScoredMove {
                position,
                score: search.evaluate(&next, 0, false),
            }
        })
        .collect();
    (scored, search.nodes)
}

/// First move with the strictly greatest score.
pub fn best_of(scored: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(*candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        let won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(evaluate(&won, 0, false, Player::O), WIN_SCORE);
        assert_eq!(evaluate(&won, 3, true, Player::O), WIN_SCORE - 3);

        let lost: Board = "XXX/OO./O..".parse().unwrap();
        assert_eq!(evaluate(&lost, 2, true, Player::O), 2 - WIN_SCORE);

        let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&drawn, 5, false, Player::O), 0);
    }

    #[test]
    fn test_immediate_win_scores_ten() {
        let board: Board = "XX./OO./X..".parse().unwrap();
        let (scored, _) = score_moves(&board, Player::O);
        let win = scored
            .iter()
            .find(|m| m.position == Position::MiddleRight)
            .unwrap();
        assert_eq!(win.score, WIN_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_perfect_play() {
        assert_eq!(evaluate(&Board::new(), 0, true, Player::X), 0);
    }

    #[test]
    fn test_best_of_keeps_first_on_ties() {
        let scored = [
            ScoredMove { position: Position::TopLeft, score: 0 },
            ScoredMove { position: Position::Center, score: 3 },
            ScoredMove { position: Position::BottomRight, score: 3 },
        ];
        assert_eq!(best_of(&scored).map(|m| m.position), Some(Position::Center));
        assert_eq!(best_of(&[]), None);
    }

    #[test]
    fn test_node_count_covers_tree() {
        let board: Board = "XOX/OX./...".parse().unwrap();
        let (scored, nodes) = score_moves(&board, Player::O);
        assert_eq!(scored.len(), 4);
        assert!(nodes >= scored.len() as u64);
    }
}
