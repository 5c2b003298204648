//! Caller-owned game session: board, marks, difficulty and running score.

use crate::config::GameConfig;
use crate::tally::ScoreTally;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tictac_core::{rules, Board, Difficulty, GameOutcome, Move, MoveError, MoveSelector, Player, Position};
use tracing::{debug, info, instrument, warn};

/// What happened in response to one human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// The human's move.
    pub human: Move,
    /// The computer's reply, absent when the human's move ended the game.
    pub computer: Option<Move>,
    /// Outcome after both moves.
    pub outcome: GameOutcome,
}

/// A human-vs-computer game and its running tally.
///
/// The computer replies to each human move synchronously, so the board
/// always shows the human to move while the game is live.
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    board: Board,
    human: Player,
    difficulty: Difficulty,
    selector: MoveSelector,
    tally: ScoreTally,
    history: Vec<Move>,
    recorded: bool,
    rng: R,
}

impl GameSession<StdRng> {
    /// Creates a session from configuration, seeding the random source
    /// from `seed` when present and from entropy otherwise.
    #[instrument(skip(config), fields(difficulty = %config.difficulty(), human = %config.human_mark()))]
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Self::new(*config.human_mark(), *config.difficulty(), rng)
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session. If the computer plays X it opens immediately.
    pub fn new(human: Player, difficulty: Difficulty, rng: R) -> Self {
        info!(human = %human, difficulty = %difficulty, "Creating game session");
        let mut session = Self {
            board: Board::new(),
            human,
            difficulty,
            selector: MoveSelector::new(human.opponent()),
            tally: ScoreTally::new(),
            history: Vec::new(),
            recorded: false,
            rng,
        };
        session.computer_opening();
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The computer's mark.
    pub fn computer(&self) -> Player {
        self.selector.computer()
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Running tally of finished games.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome of the current game, derived from the board.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(&self.board)
    }

    /// Changes difficulty; applies from the computer's next move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Plays the human's mark at `position`, then the computer's reply
    /// if the game is still live.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] after a win or draw and
    /// [`MoveError::SquareOccupied`] for a taken square. Neither changes
    /// the session.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn play(&mut self, position: Position) -> Result<TurnReport, MoveError> {
        let human = Move::new(self.human, position);
        human.apply(&mut self.board).inspect_err(|e| {
            warn!(error = %e, "Rejected human move");
        })?;
        self.history.push(human);

        let computer = if self.outcome().is_over() {
            None
        } else {
            self.computer_turn()?
        };

        let outcome = self.settle();
        info!(%outcome, ?computer, "Turn complete");
        Ok(TurnReport {
            human,
            computer,
            outcome,
        })
    }

    /// Clears the board for a new game, keeping the tally and difficulty.
    ///
    /// Returns the computer's opening move when it plays X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Option<Move> {
        self.board.clear();
        self.history.clear();
        self.recorded = false;
        info!("Board reset");
        self.computer_opening()
    }

    fn computer_opening(&mut self) -> Option<Move> {
        if self.computer() != Player::X {
            return None;
        }
        // An empty board always has a legal square.
        self.computer_turn().ok().flatten()
    }

    fn computer_turn(&mut self) -> Result<Option<Move>, MoveError> {
        let Some(position) = self
            .selector
            .select_move(&self.board, self.difficulty, &mut self.rng)
        else {
            debug!("No square left for the computer");
            return Ok(None);
        };
        let reply = Move::new(self.computer(), position);
        reply.apply(&mut self.board)?;
        self.history.push(reply);
        Ok(Some(reply))
    }

    /// Records a finished game in the tally exactly once.
    fn settle(&mut self) -> GameOutcome {
        let outcome = self.outcome();
        if outcome.is_over() && !self.recorded {
            self.tally.record(outcome, self.human);
            self.recorded = true;
        }
        outcome
    }
}
