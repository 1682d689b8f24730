//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`]. Nothing here is stored: the status of a
//! game is recomputed from the board whenever it is needed.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, has_line, winner};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board.
///
/// A line for either mark wins; otherwise a full board is a draw. Both marks
/// holding a line at once cannot arise from alternating play, so `First` is
/// simply checked before `Second`.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::Drawn);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::Won(Mark::First));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let first = evaluate(&board);
        assert_eq!(evaluate(&board), first);
        assert_eq!(first, GameStatus::InProgress);
    }
}
