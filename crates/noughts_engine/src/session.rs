//! Game session controller.
//!
//! A [`Session`] owns one board and everything needed to run a game against
//! the computer: which mark the human plays, which policy the computer uses,
//! whose turn it is, and where the game is in its lifecycle. All mutation goes
//! through its methods, and every method returns a [`Snapshot`] so the caller
//! can redraw without further queries.

use crate::action::Move;
use crate::error::{GameError, InvalidMove, Rejection};
use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::phases::Phase;
use crate::policy::Difficulty;
use crate::position::Position;
use crate::rules::evaluate;
use crate::types::{Board, GameStatus, Mark};
use derive_getters::Getters;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The mark that opens every game.
pub const OPENING_MARK: Mark = Mark::First;

/// Side and difficulty for a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mark the human plays; the computer plays the other.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Policy the computer uses.
    #[serde(default)]
    difficulty: Difficulty,

    /// Seed for the computer's random choices. `None` seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human_mark() -> Mark {
    Mark::First
}

impl SessionConfig {
    /// Creates a configuration with no fixed seed.
    pub fn new(human_mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            human_mark,
            difficulty,
            seed: None,
        }
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(default_human_mark(), Difficulty::default())
    }
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current board.
    board: Board,
    /// Status derived from the board.
    status: GameStatus,
    /// Lifecycle phase.
    phase: Phase,
    /// Mark to move next (the last mover once the game is over).
    to_move: Mark,
    /// Most recent move, human or computer.
    last_move: Option<Move>,
}

/// A game between a human and the computer.
///
/// Generic over the random source so tests can inject a seeded generator;
/// [`Session::new`] uses [`ChaCha8Rng`].
#[derive(Debug, Clone)]
pub struct Session<R = ChaCha8Rng> {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) phase: Phase,
    to_move: Mark,
    human_mark: Mark,
    difficulty: Difficulty,
    rng: R,
}

impl Session {
    /// Creates a session waiting to start.
    ///
    /// Seeds from `config.seed` when set, otherwise from the thread RNG.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session with an explicit random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        info!(
            human = %config.human_mark,
            difficulty = %config.difficulty,
            "Creating new game session"
        );
        Self {
            board: Board::new(),
            history: Vec::new(),
            phase: Phase::AwaitingStart,
            to_move: OPENING_MARK,
            human_mark: config.human_mark,
            difficulty: config.difficulty,
            rng,
        }
    }

    /// Chooses the human's side and the computer's difficulty.
    ///
    /// The computer takes the other mark and the board is cleared.
    ///
    /// # Errors
    ///
    /// [`GameError::NotAcceptingInput`] once the session has started.
    #[instrument(skip(self))]
    pub fn configure(
        &mut self,
        human_mark: Mark,
        difficulty: Difficulty,
    ) -> Result<Snapshot, GameError> {
        self.require_configurable()?;
        self.human_mark = human_mark;
        self.difficulty = difficulty;
        self.clear();
        info!(computer = %self.computer_mark(), "Session configured");
        Ok(self.snapshot())
    }

    /// Changes the computer's difficulty.
    ///
    /// # Errors
    ///
    /// [`GameError::NotAcceptingInput`] once the session has started.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<Snapshot, GameError> {
        self.require_configurable()?;
        self.difficulty = difficulty;
        info!("Difficulty changed");
        Ok(self.snapshot())
    }

    /// Starts play. If the computer opens, its first move is already on the
    /// returned board.
    ///
    /// # Errors
    ///
    /// [`GameError::NotAcceptingInput`] if the session has already started.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<Snapshot, GameError> {
        self.require_configurable()?;
        self.phase = Phase::InProgress;
        info!(
            human = %self.human_mark,
            difficulty = %self.difficulty,
            "Game started"
        );
        self.open_for_computer()?;
        Ok(self.snapshot())
    }

    /// Plays the human's mark at `(row, col)` and, if the game goes on, the
    /// computer's reply.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotAcceptingInput`] before `start()`, after the game
    ///   has ended, or when it is not the human's turn.
    /// - [`GameError::InvalidMove`] for coordinates off the board or an
    ///   occupied cell. The board is unchanged.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> Result<Snapshot, GameError> {
        self.require_human_turn()
            .inspect_err(|err| warn!(%err, "Rejected human move"))?;

        let position = Position::from_row_col(row, col)
            .ok_or(GameError::InvalidMove(InvalidMove::OutOfBounds { row, col }))
            .inspect_err(|err| warn!(%err, "Rejected human move"))?;

        let status = self
            .place(position, self.human_mark)
            .inspect_err(|err| warn!(%err, "Rejected human move"))?;

        if !status.is_terminal() && self.to_move == self.computer_mark() {
            self.play_computer()?;
        }

        Ok(self.snapshot())
    }

    /// Clears the board and keeps side and difficulty.
    ///
    /// A session that has not started stays waiting, so settings remain
    /// editable. A started session goes straight back into play, with the
    /// computer's opening move made if it plays first.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<Snapshot, GameError> {
        self.clear();
        match self.phase {
            Phase::AwaitingStart => {
                debug!("Reset before start");
            }
            Phase::InProgress | Phase::Terminal => {
                self.phase = Phase::InProgress;
                info!("Game reset");
                self.open_for_computer()?;
            }
        }
        Ok(self.snapshot())
    }

    /// Clears the board and returns to [`Phase::AwaitingStart`] so side and
    /// difficulty can be changed again.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Snapshot {
        self.clear();
        self.phase = Phase::AwaitingStart;
        info!("Session returned to setup");
        self.snapshot()
    }
}

impl<R> Session<R> {
    /// Current board, status and turn.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            status: self.status(),
            phase: self.phase,
            to_move: self.to_move,
            last_move: self.history.last().copied(),
        }
    }

    /// Status derived from the current board.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Mark the human plays.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// Mark the computer plays.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Policy the computer uses.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks every session invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        SessionInvariants::check_all(self)
    }

    fn require_configurable(&self) -> Result<(), GameError> {
        if self.phase.is_configurable() {
            Ok(())
        } else {
            Err(GameError::NotAcceptingInput(Rejection::AlreadyStarted))
        }
    }

    fn require_human_turn(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::AwaitingStart => Err(GameError::NotAcceptingInput(Rejection::AwaitingStart)),
            Phase::Terminal => Err(GameError::NotAcceptingInput(Rejection::Terminal)),
            Phase::InProgress if self.to_move != self.human_mark => Err(
                GameError::NotAcceptingInput(Rejection::NotYourTurn(self.to_move)),
            ),
            Phase::InProgress => Ok(()),
        }
    }

    fn clear(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.to_move = OPENING_MARK;
    }
}

impl<R: Rng> Session<R> {
    /// Plays the computer's opening move when it holds the opening mark.
    fn open_for_computer(&mut self) -> Result<(), GameError> {
        if self.to_move == self.computer_mark() {
            self.play_computer()?;
        }
        Ok(())
    }

    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    fn play_computer(&mut self) -> Result<Position, GameError> {
        let computer = self.computer_mark();
        let position =
            self.difficulty
                .select_move(&self.board, computer, self.human_mark, &mut self.rng)?;
        self.place(position, computer)?;
        info!(%position, "Computer moved");
        Ok(position)
    }

    /// The single path through which marks reach the board.
    fn place(&mut self, position: Position, mark: Mark) -> Result<GameStatus, GameError> {
        self.board.apply(position, mark)?;
        self.history.push(Move::new(mark, position));

        let status = self.status();
        if status.is_terminal() {
            self.phase = Phase::Terminal;
            info!(%status, moves = self.history.len(), "Game over");
        } else {
            self.to_move = mark.opponent();
        }

        debug_assert!(
            self.check_invariants().is_ok(),
            "Session invariants violated: {:?}",
            self.check_invariants()
        );
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn session(human: Mark, difficulty: Difficulty) -> Session {
        Session::new(SessionConfig::new(human, difficulty).with_seed(42))
    }

    #[test]
    fn test_new_session_awaits_start() {
        let s = session(Mark::First, Difficulty::Random);
        assert_eq!(s.phase(), Phase::AwaitingStart);
        assert_eq!(s.to_move(), Mark::First);
        assert_eq!(s.computer_mark(), Mark::Second);
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_move_before_start_rejected() {
        let mut s = session(Mark::First, Difficulty::Random);
        assert_eq!(
            s.submit_human_move(0, 0),
            Err(GameError::NotAcceptingInput(Rejection::AwaitingStart))
        );
        assert_eq!(s.board().move_count(), 0);
    }

    #[test]
    fn test_human_first_computer_replies() {
        let mut s = session(Mark::First, Difficulty::Search);
        let snap = s.start().unwrap();
        assert_eq!(snap.board().move_count(), 0);

        let snap = s.submit_human_move(1, 1).unwrap();
        assert_eq!(snap.board().count(Mark::First), 1);
        assert_eq!(snap.board().count(Mark::Second), 1);
        assert_eq!(*snap.to_move(), Mark::First);
        assert_eq!(snap.last_move().map(|m| m.mark), Some(Mark::Second));
    }

    #[test]
    fn test_computer_opens_when_human_second() {
        let mut s = session(Mark::Second, Difficulty::Search);
        let snap = s.start().unwrap();
        assert_eq!(snap.board().count(Mark::First), 1);
        assert_eq!(*snap.to_move(), Mark::Second);
        assert_eq!(*snap.phase(), Phase::InProgress);
    }

    #[test]
    fn test_occupied_cell_rejected_board_unchanged() {
        let mut s = session(Mark::Second, Difficulty::Search);
        s.start().unwrap();
        // Search opens in the top-left corner.
        assert_eq!(s.board().get(Position::TopLeft), Cell::Occupied(Mark::First));
        let before = *s.board();
        assert_eq!(
            s.submit_human_move(0, 0),
            Err(GameError::InvalidMove(InvalidMove::Occupied(Position::TopLeft)))
        );
        assert_eq!(*s.board(), before);
        assert_eq!(s.phase(), Phase::InProgress);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut s = session(Mark::First, Difficulty::Random);
        s.start().unwrap();
        assert_eq!(
            s.submit_human_move(3, 1),
            Err(GameError::InvalidMove(InvalidMove::OutOfBounds { row: 3, col: 1 }))
        );
    }

    #[test]
    fn test_configure_only_before_start() {
        let mut s = session(Mark::First, Difficulty::Random);
        let snap = s.configure(Mark::Second, Difficulty::Heuristic).unwrap();
        assert_eq!(s.computer_mark(), Mark::First);
        assert_eq!(s.difficulty(), Difficulty::Heuristic);
        assert_eq!(*snap.phase(), Phase::AwaitingStart);

        s.set_difficulty(Difficulty::Search).unwrap();
        s.start().unwrap();
        assert_eq!(
            s.configure(Mark::First, Difficulty::Random),
            Err(GameError::NotAcceptingInput(Rejection::AlreadyStarted))
        );
        assert_eq!(
            s.set_difficulty(Difficulty::Random),
            Err(GameError::NotAcceptingInput(Rejection::AlreadyStarted))
        );
        assert_eq!(
            s.start(),
            Err(GameError::NotAcceptingInput(Rejection::AlreadyStarted))
        );
    }

    #[test]
    fn test_reset_keeps_settings_and_replays_opening() {
        let mut s = session(Mark::Second, Difficulty::Search);
        s.start().unwrap();
        s.submit_human_move(1, 1).unwrap();

        let snap = s.reset().unwrap();
        assert_eq!(*snap.phase(), Phase::InProgress);
        assert_eq!(snap.board().move_count(), 1);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.difficulty(), Difficulty::Search);
        assert_eq!(s.human_mark(), Mark::Second);
    }

    #[test]
    fn test_reset_before_start_stays_configurable() {
        let mut s = session(Mark::First, Difficulty::Random);
        let snap = s.reset().unwrap();
        assert_eq!(*snap.phase(), Phase::AwaitingStart);
        assert!(s.set_difficulty(Difficulty::Search).is_ok());
    }

    #[test]
    fn test_restart_returns_to_setup() {
        let mut s = session(Mark::First, Difficulty::Random);
        s.start().unwrap();
        s.submit_human_move(0, 0).unwrap();
        let snap = s.restart();
        assert_eq!(*snap.phase(), Phase::AwaitingStart);
        assert_eq!(snap.board().move_count(), 0);
        assert!(s.configure(Mark::Second, Difficulty::Search).is_ok());
    }

    #[test]
    fn test_snapshot_query_is_idempotent() {
        let mut s = session(Mark::First, Difficulty::Heuristic);
        s.start().unwrap();
        s.submit_human_move(0, 0).unwrap();
        assert_eq!(s.snapshot(), s.snapshot());
        assert_eq!(s.status(), s.status());
    }

    /// Reads a session without requiring a random source.
    fn summarize<R>(session: &Session<R>) -> (usize, Phase, Mark, bool) {
        (
            session.history().len(),
            session.phase(),
            session.computer_mark(),
            session.check_invariants().is_ok(),
        )
    }

    #[test]
    fn test_queries_need_no_rng_bound() {
        let mut s = session(Mark::Second, Difficulty::Search);
        s.start().unwrap();
        assert_eq!(summarize(&s), (1, Phase::InProgress, Mark::First, true));
        assert_eq!(s.snapshot().board(), s.board());
    }

    #[test]
    fn test_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(*config.human_mark(), Mark::First);
        assert_eq!(*config.difficulty(), Difficulty::Random);
        assert_eq!(*config.seed(), None);
    }
}
