//! Win detection.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark` holds three in a row anywhere on the board.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let cell = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == cell))
}

/// Returns the mark holding a line, checking `First` before `Second`.
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::First, Mark::Second]
        .into_iter()
        .find(|mark| has_line(board, *mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::First));
        assert!(!has_line(&board, Mark::Second));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.O.".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::Second));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "X.O/XO./O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::Second));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }
}
