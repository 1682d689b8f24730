//! Exhaustive minimax policy.
//!
//! The game tree below any position has at most 9! leaves, so the search runs
//! to the end of the game without pruning or a depth limit. Each recursive call
//! works on its own copy of the board; the caller's board is never touched.

use super::MovePolicy;
use crate::error::GameError;
use crate::position::Position;
use crate::rules::has_line;
use crate::types::{Board, Mark};
use rand::Rng;
use tracing::{debug, instrument};

/// Score of a position the computer has won.
pub const WIN: i8 = 1;
/// Score of a drawn position.
pub const DRAW: i8 = 0;
/// Score of a position the human has won.
pub const LOSS: i8 = -1;

/// The two marks scores are measured against.
///
/// Fixed for a whole search: terminal checks always ask "does the computer
/// have a line?" then "does the human have a line?", whichever mark is to
/// move at that depth.
#[derive(Debug, Clone, Copy)]
struct Sides {
    computer: Mark,
    human: Mark,
}

impl Sides {
    fn other(self, mark: Mark) -> Mark {
        if mark == self.computer {
            self.human
        } else {
            self.computer
        }
    }
}

/// Plays the minimax-optimal move; never loses.
///
/// Ties go to the first cell in row-major order, so the policy is fully
/// deterministic and ignores the random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchPolicy;

impl SearchPolicy {
    /// Minimax score of every empty cell for `acting`, row-major.
    ///
    /// Scores are from `acting`'s point of view: [`WIN`], [`DRAW`] or [`LOSS`]
    /// under best play by both sides.
    #[instrument(skip(board), fields(board = %board))]
    pub fn move_scores(board: &Board, acting: Mark, opponent: Mark) -> Vec<(Position, i8)> {
        let sides = Sides {
            computer: acting,
            human: opponent,
        };
        board
            .empty_cells()
            .into_iter()
            .map(|pos| (pos, minimax(&board.with(pos, acting), opponent, sides)))
            .collect()
    }
}

impl MovePolicy for SearchPolicy {
    #[instrument(skip(self, board, _rng), fields(board = %board))]
    fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        acting: Mark,
        opponent: Mark,
        _rng: &mut R,
    ) -> Result<Position, GameError> {
        let mut best: Option<(Position, i8)> = None;
        for (pos, score) in Self::move_scores(board, acting, opponent) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let (position, score) = best.ok_or(GameError::NoMovesAvailable)?;
        debug!(%position, score, "Search policy chose position");
        Ok(position)
    }
}

/// Value of `board` with `to_move` about to play.
///
/// The computer's layers maximise and the human's minimise; on equal scores
/// the first cell seen wins.
fn minimax(board: &Board, to_move: Mark, sides: Sides) -> i8 {
    if has_line(board, sides.computer) {
        return WIN;
    }
    if has_line(board, sides.human) {
        return LOSS;
    }

    let empty = board.empty_cells();
    if empty.is_empty() {
        return DRAW;
    }

    let maximizing = to_move == sides.computer;
    let next = sides.other(to_move);
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for pos in empty {
        let score = minimax(&board.with(pos, to_move), next, sides);
        let improves = if maximizing {
            score > best
        } else {
            score < best
        };
        if improves {
            best = score;
        }
    }

    best
}
