//! Tests for tic-tac-toe positions and board text.

use tictac::{Board, Position, Square, TicTacToePlayer as Player};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid, Position::ALL.to_vec()); // row-major scan order
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_board_from_rows() {
    let e = Square::Empty;
    let x = Square::Occupied(Player::X);
    let o = Square::Occupied(Player::O);
    let board = Board::from([[x, x, e], [o, o, e], [e, e, e]]);
    assert_eq!(board, "XX./OO./...".parse::<Board>().unwrap());
    assert_eq!(board.to_string(), "XX./OO./...");
    assert_eq!(board.count(Player::X), 2);
    assert_eq!(board.count(Player::O), 2);
}

#[test]
fn test_board_parse_accepts_lowercase_and_blanks() {
    let board: Board = "x_o/-O./...".parse().unwrap();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopRight), Square::Occupied(Player::O));
    assert!(board.is_empty(Position::TopCenter));
    assert!(board.is_empty(Position::MiddleLeft));
}
