//! Uniform random move choice.

use crate::{Board, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks an empty square uniformly at random.
///
/// Returns `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty = Position::valid_moves(board);
    empty.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_empty_square_is_always_chosen() {
        let board: Board = "XOX/XOO/OX.".parse().unwrap();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(random_move(&board, &mut rng), Some(Position::BottomRight));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_only_empty_squares_are_chosen() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let pos = random_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_every_empty_square_is_reachable() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[random_move(&board, &mut rng).unwrap().to_index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
