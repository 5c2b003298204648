//! Tictac - unified CLI
//!
//! Interactive play, move suggestions and engine self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictac::{Board, Difficulty, GameConfig, GameSession, MoveSelector, TicTacToePlayer as Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the game on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play {
            difficulty,
            human_mark,
            seed,
        } => run_play(config.with_overrides(difficulty, human_mark, seed)),
        Command::Suggest {
            board,
            mark,
            difficulty,
            seed,
            json,
        } => run_suggest(board, mark, difficulty, seed.or(*config.seed()), json),
        Command::Selfplay {
            games,
            x,
            o,
            seed,
            json,
        } => run_selfplay(games, x, o, seed.or(*config.seed()), json),
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the interactive shell on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: GameConfig) -> Result<()> {
    info!(?config, "Starting interactive game");
    let mut session = GameSession::from_config(&config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    tictac::run_shell(&mut session, stdin.lock(), &mut stdout)
}

/// Print the selector's move for a given board
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(
    board: Board,
    mark: Option<Player>,
    difficulty: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let outcome = tictac::outcome(&board);
    if outcome.is_over() {
        println!("Game already over: {}", outcome);
        return Ok(());
    }

    let selector = MoveSelector::new(mark.unwrap_or_else(|| board.next_to_move()));
    println!("{}\n", board.display());

    match difficulty {
        Difficulty::Hard => {
            let analysis = selector
                .analyze(&board)
                .context("Board has no empty square")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                for scored in &analysis.moves {
                    println!("  {:<14} {:>3}", scored.position.label(), scored.score);
                }
                println!(
                    "{} plays {} (score {}, {} positions searched)",
                    selector.computer(),
                    analysis.best,
                    analysis.score,
                    analysis.nodes
                );
            }
        }
        Difficulty::Easy => {
            let mut rng = rng_from(seed);
            let position = selector
                .select_move(&board, difficulty, &mut rng)
                .context("Board has no empty square")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&position)?);
            } else {
                println!("{} plays {}", selector.computer(), position);
            }
        }
    }

    Ok(())
}

/// Play engine-vs-engine games and print the totals
#[instrument]
fn run_selfplay(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut rng = rng_from(seed);
    let report = tictac::run_selfplay(games, x, o, &mut rng)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
