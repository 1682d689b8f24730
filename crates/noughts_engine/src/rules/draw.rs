//! Draw detection.

use super::win::winner;
use crate::types::Board;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = ".../.X./...".parse().unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX/OOX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
