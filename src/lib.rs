//! Tic-tac-toe against a minimax opponent.
//!
//! This crate is the caller side of [`tictac_core`]: it owns the game
//! session, the running score, configuration and the terminal shell.
//!
//! # Architecture
//!
//! - **Session**: board, marks, difficulty and random source for one player
//! - **Tally**: wins and draws across games in a session
//! - **Shell**: line-oriented terminal front end
//! - **Self-play**: engine-vs-engine games
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictac::{GameSession, TicTacToePlayer as Player};
//! use tictac::{Difficulty, Position};
//!
//! let rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut session = GameSession::new(Player::X, Difficulty::Hard, rng);
//! let report = session.play(Position::Center).unwrap();
//! assert!(report.computer.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod selfplay;
mod session;
mod shell;
mod tally;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, DEFAULT_CONFIG_PATH};

// Crate-level exports - Session management
pub use session::{GameSession, TurnReport};
pub use tally::ScoreTally;

// Crate-level exports - Front ends
pub use selfplay::{play_game, run as run_selfplay, GameRecord, SelfPlayReport};
pub use shell::{render, run as run_shell, ShellCommand, UnknownCommand};

// Crate-level exports - Game types (tic-tac-toe)
pub use tictac_core::{
    find_winner, is_draw, outcome, select_move, Analysis, Board, Difficulty, GameOutcome, Move,
    MoveError, MoveSelector, Position, ScoredMove, Square,
    Player as TicTacToePlayer,
};
