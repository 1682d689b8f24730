//! Errors reported by the board, policies and session.

use crate::position::Position;
use crate::types::Mark;
use derive_more::Display;

/// Error returned by game operations.
///
/// Every variant is recoverable: the caller decides whether to re-prompt,
/// ignore, or surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameError {
    /// The requested move cannot be played.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// The session is not taking moves from this caller right now.
    #[display("Not accepting input: {}", _0)]
    NotAcceptingInput(Rejection),

    /// A policy was asked to move on a full board.
    #[display("No moves available")]
    NoMovesAvailable,
}

impl std::error::Error for GameError {}

/// Why a move was invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// Cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// Coordinates outside the 3x3 grid.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The board already has a result.
    #[display("game is already over")]
    GameOver,
}

/// Why the session refused input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// `start()` has not been called.
    #[display("game has not started")]
    AwaitingStart,

    /// Side and difficulty are fixed once play has begun.
    #[display("game already started")]
    AlreadyStarted,

    /// The game has finished.
    #[display("game is over")]
    Terminal,

    /// The other mark is to move.
    #[display("it is {}'s turn", _0)]
    NotYourTurn(Mark),
}
