//! One-ply heuristic policy.

use super::{MovePolicy, RandomPolicy};
use crate::error::GameError;
use crate::position::Position;
use crate::rules::has_line;
use crate::types::{Board, Mark};
use rand::Rng;
use tracing::{debug, instrument};

/// Takes a winning cell, otherwise blocks the opponent's winning cell,
/// otherwise plays randomly.
///
/// Both scans run in row-major order and stop at the first hit, so only the
/// fallback consumes randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// First empty cell (row-major) where `mark` would complete a line.
    pub fn winning_cell(board: &Board, mark: Mark) -> Option<Position> {
        board
            .empty_cells()
            .into_iter()
            .find(|pos| has_line(&board.with(*pos, mark), mark))
    }
}

impl MovePolicy for HeuristicPolicy {
    #[instrument(skip(self, board, rng), fields(board = %board))]
    fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        acting: Mark,
        opponent: Mark,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        if board.is_full() {
            return Err(GameError::NoMovesAvailable);
        }

        if let Some(position) = Self::winning_cell(board, acting) {
            debug!(%position, "Heuristic policy takes the win");
            return Ok(position);
        }

        if let Some(position) = Self::winning_cell(board, opponent) {
            debug!(%position, "Heuristic policy blocks");
            return Ok(position);
        }

        RandomPolicy.select_move(board, acting, opponent, rng)
    }
}
