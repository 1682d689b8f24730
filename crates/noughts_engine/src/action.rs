//! First-class move records.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// Sessions keep these in order so the sequence of play can be inspected and
/// checked against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark.symbol(), self.position)
    }
}
