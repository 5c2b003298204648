//! Pure tic-tac-toe game logic.
//!
//! - **Board state evaluation**: [`find_winner`], [`is_draw`], [`outcome`]
//! - **Move selection**: [`select_move`] / [`MoveSelector`] with an
//!   [`Difficulty::Easy`] random strategy and a [`Difficulty::Hard`]
//!   exhaustive minimax strategy
//!
//! Nothing here performs I/O or holds global state. Callers own their
//! boards and random sources.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictac_core::{select_move, Board, Difficulty, Position};
//!
//! let board: Board = "XX./.O./...".parse().unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! assert_eq!(select_move(&board, Difficulty::Hard, &mut rng), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use ai::{select_move, Analysis, Difficulty, MoveSelector, ScoredMove};
pub use outcome::GameOutcome;
pub use position::Position;
pub use rules::{find_winner, is_draw, is_full, outcome};
pub use types::{Board, BoardParseError, Player, Square};
