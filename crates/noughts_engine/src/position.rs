//! Named board positions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell position on the board.
///
/// Variants are declared in row-major order; [`Position::ALL`] and every
/// enumeration in this crate follow that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, col 0)
    TopLeft,
    /// Top-center (row 0, col 1)
    TopCenter,
    /// Top-right (row 0, col 2)
    TopRight,
    /// Middle-left (row 1, col 0)
    MiddleLeft,
    /// Center (row 1, col 1)
    Center,
    /// Middle-right (row 1, col 2)
    MiddleRight,
    /// Bottom-left (row 2, col 0)
    BottomLeft,
    /// Bottom-center (row 2, col 1)
    BottomCenter,
    /// Bottom-right (row 2, col 2)
    BottomRight,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from zero-based row and column.
    #[instrument(level = "trace")]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// True for the four corner cells.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}
