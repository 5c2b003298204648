//! Line-oriented terminal shell over a [`GameSession`].
//!
//! Reads one command per line and renders the board, score and result
//! after each one. The shell owns no game state of its own.

use crate::session::GameSession;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictac_core::{Difficulty, GameOutcome, MoveError, Position};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  1-9 or a cell name   place your mark (e.g. 5, center, top-left)
  easy | hard          change the computer's difficulty
  reset                start a new game (the score is kept)
  score                show the running score
  help                 show this message
  quit                 leave the game";

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Place the human's mark.
    Place(Position),
    /// Change difficulty.
    SetDifficulty(Difficulty),
    /// Start a new game.
    Reset,
    /// Print the tally.
    Score,
    /// Print the command list.
    Help,
    /// Leave the shell.
    Quit,
}

/// Unrecognized shell input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown command {:?}; type 'help' for the command list", input)]
pub struct UnknownCommand {
    /// The rejected input.
    pub input: String,
}

impl FromStr for ShellCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "reset" | "r" | "new" => return Ok(ShellCommand::Reset),
            "score" | "s" => return Ok(ShellCommand::Score),
            "help" | "h" | "?" => return Ok(ShellCommand::Help),
            "quit" | "q" | "exit" => return Ok(ShellCommand::Quit),
            _ => {}
        }
        if let Ok(difficulty) = trimmed.parse::<Difficulty>() {
            return Ok(ShellCommand::SetDifficulty(difficulty));
        }
        Position::from_label_or_number(trimmed)
            .map(ShellCommand::Place)
            .ok_or_else(|| UnknownCommand {
                input: trimmed.to_string(),
            })
    }
}

/// Runs the shell until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: Rng, I: BufRead, W: Write>(
    session: &mut GameSession<R>,
    input: I,
    output: &mut W,
) -> Result<()> {
    writeln!(
        output,
        "Tic-tac-toe: you play {}, the computer plays {}. Type 'help' for commands.",
        session.human(),
        session.computer()
    )?;
    if let Some(opening) = session.history().first() {
        writeln!(output, "Computer plays {}", opening.position)?;
    }
    render(session, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Shell command");

        match command {
            ShellCommand::Place(position) => match session.play(position) {
                Ok(report) => {
                    if let Some(reply) = report.computer {
                        writeln!(output, "Computer plays {}", reply.position)?;
                    }
                    render(session, output)?;
                }
                Err(MoveError::SquareOccupied(position)) => {
                    writeln!(output, "{} is already taken.", position)?;
                }
                Err(MoveError::GameOver) => {
                    writeln!(output, "The game is over. Type 'reset' to play again.")?;
                }
            },
            ShellCommand::SetDifficulty(difficulty) => {
                session.set_difficulty(difficulty);
                writeln!(output, "Difficulty set to {}", difficulty)?;
            }
            ShellCommand::Reset => {
                let opening = session.reset();
                if let Some(opening) = opening {
                    writeln!(output, "Computer plays {}", opening.position)?;
                }
                render(session, output)?;
            }
            ShellCommand::Score => writeln!(output, "{}", session.tally())?,
            ShellCommand::Help => writeln!(output, "{}", HELP)?,
            ShellCommand::Quit => break,
        }
    }

    writeln!(output, "Final score - {}", session.tally())?;
    Ok(())
}

/// Writes the board, status line and result of a finished game.
pub fn render<R: Rng, W: Write>(session: &GameSession<R>, output: &mut W) -> Result<()> {
    writeln!(output, "{}", session.board().display())?;
    writeln!(
        output,
        "Difficulty: {} | {}",
        session.difficulty(),
        session.tally()
    )?;
    match session.outcome() {
        GameOutcome::Win(player) if player == session.human() => writeln!(output, "You win!")?,
        GameOutcome::Win(_) => writeln!(output, "Computer wins!")?,
        GameOutcome::Draw => writeln!(output, "It's a draw!")?,
        GameOutcome::InProgress => {}
    }
    Ok(())
}
