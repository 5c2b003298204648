//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use tictac::{Board, Difficulty, TicTacToePlayer as Player};

/// Tictac - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml when present)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Computer difficulty (easy or hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark you play (X moves first)
        #[arg(long)]
        human_mark: Option<Player>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the computer's move for a board
    Suggest {
        /// Board as three rows, e.g. "XX./OO./..."
        #[arg(short, long)]
        board: Board,

        /// Mark to move (inferred from the board when omitted)
        #[arg(short, long)]
        mark: Option<Player>,

        /// Selection strategy
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for easy mode
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play itself
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value_t = 1)]
        games: u32,

        /// Difficulty for X
        #[arg(short = 'x', long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty for O
        #[arg(short = 'o', long, default_value = "hard")]
        o: Difficulty,

        /// Seed for easy-mode choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
