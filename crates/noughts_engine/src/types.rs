//! Core domain types for noughts and crosses.

use crate::error::{GameError, InvalidMove};
use crate::position::Position;
use crate::rules;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mark {
    /// Moves first, drawn as `X`.
    #[serde(alias = "x")]
    #[strum(to_string = "first", serialize = "x")]
    First,
    /// Moves second, drawn as `O`.
    #[serde(alias = "o")]
    #[strum(to_string = "second", serialize = "o")]
    Second,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::First => 'X',
            Mark::Second => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board.
///
/// Cells are stored row-major. The board is `Copy`, so simulating a move is a
/// matter of copying it and placing a mark on the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows of cells.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                board.cells[row * 3 + col] = *cell;
            }
        }
        board
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their `row,col` coordinates so a player can read off
    /// the move to type.
    pub fn grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => format!("{},{}", row, col),
                    Cell::Occupied(mark) => format!(" {} ", mark.symbol()),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }

    /// Places `mark` at `pos` and returns the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the cell is occupied or the game
    /// on this board is already decided. The board is left untouched.
    #[instrument(skip(self), fields(board = %self))]
    pub fn apply(&mut self, pos: Position, mark: Mark) -> Result<Board, GameError> {
        if rules::evaluate(self).is_terminal() {
            return Err(GameError::InvalidMove(InvalidMove::GameOver));
        }
        if !self.is_empty(pos) {
            return Err(GameError::InvalidMove(InvalidMove::Occupied(pos)));
        }
        self.place(pos, mark);
        Ok(*self)
    }

    /// Returns a copy of this board with `mark` at `pos`, without validation.
    ///
    /// Used by policies to simulate moves on scratch copies.
    pub(crate) fn with(&self, pos: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.place(pos, mark);
        next
    }

    fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = Cell::Occupied(mark);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(mark) => mark.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
            if row < 2 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// A character that is not a mark or an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` are marks, `.`, `_` and `-` are empty. Whitespace and `/`
    /// separators are ignored, so `"XX./OO./..."` and `"XX.\nOO.\n..."` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            if ch.is_whitespace() || ch == '/' {
                continue;
            }
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::First),
                'O' | 'o' => Cell::Occupied(Mark::Second),
                '.' | '_' | '-' => Cell::Empty,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| ParseBoardError::WrongCellCount(v.len()))?;
        Ok(Self { cells })
    }
}

/// Status of a game, always derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board full with no line.
    Drawn,
}

impl GameStatus {
    /// True for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "{} wins", mark.symbol()),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}
