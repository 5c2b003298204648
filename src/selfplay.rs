//! Engine-vs-engine games.

use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use tictac_core::{rules, Board, Difficulty, GameOutcome, Move, MoveError, MoveSelector, Player};
use tracing::{debug, info, instrument};

/// One finished engine-vs-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameRecord {
    /// Moves in play order.
    moves: Vec<Move>,
    /// Final board.
    board: Board,
    /// Final outcome.
    outcome: GameOutcome,
}

/// Totals over a run of self-play games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SelfPlayReport {
    /// Games played.
    games: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl SelfPlayReport {
    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw | GameOutcome::InProgress => self.draws += 1,
        }
    }
}

impl std::fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Games: {} | X wins: {} | O wins: {} | Draws: {}",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays one game from an empty board, each side using its own difficulty.
///
/// # Errors
///
/// Propagates a [`MoveError`] if a selector returns an illegal square.
#[instrument(skip(rng))]
pub fn play_game<R: Rng + ?Sized>(
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Result<GameRecord, MoveError> {
    let mut board = Board::new();
    let mut moves = Vec::with_capacity(9);

    while !rules::outcome(&board).is_over() {
        let mover = board.next_to_move();
        let difficulty = match mover {
            Player::X => x,
            Player::O => o,
        };
        let Some(position) = MoveSelector::new(mover).select_move(&board, difficulty, rng) else {
            break;
        };
        let mv = Move::new(mover, position);
        mv.apply(&mut board)?;
        debug!(%mv, "Self-play move");
        moves.push(mv);
    }

    Ok(GameRecord {
        moves,
        board,
        outcome: rules::outcome(&board),
    })
}

/// Plays `games` games and tallies the results.
#[instrument(skip(rng))]
pub fn run<R: Rng + ?Sized>(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Result<SelfPlayReport, MoveError> {
    let mut report = SelfPlayReport::default();
    for _ in 0..games {
        let record = play_game(x, o, rng)?;
        report.record(record.outcome);
    }
    info!(%report, "Self-play finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_easy_games_always_finish() {
        let mut rng = StdRng::seed_from_u64(9);
        let report = run(20, Difficulty::Easy, Difficulty::Easy, &mut rng).unwrap();
        assert_eq!(*report.games(), 20);
        assert_eq!(report.x_wins() + report.o_wins() + report.draws(), 20);
    }

    #[test]
    fn test_hard_never_loses_to_easy() {
        let mut rng = StdRng::seed_from_u64(21);
        let report = run(10, Difficulty::Easy, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(*report.x_wins(), 0);
    }
}
