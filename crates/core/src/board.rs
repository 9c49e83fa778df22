//! The 3x3 board and the fixed catalog of winning lines.

use crate::error::MoveRejection;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Number of cells on the board.
pub const NUM_CELLS: usize = 9;

/// Three board indices that form a line.
pub type WinPattern = [usize; 3];

/// Every winning line, in scan order.
///
/// The order decides which line the evaluator reports and which line the
/// opponent completes or blocks when several qualify.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Tic-tac-toe board.
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; NUM_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cell contents.
    pub fn from_cells(cells: [Option<Mark>; NUM_CELLS]) -> Self {
        Self { cells }
    }

    /// Get the mark at a cell, if any. Out-of-range cells read as empty.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    /// True if `cell` is on the board and holds no mark.
    pub fn is_free(&self, cell: usize) -> bool {
        cell < NUM_CELLS && self.cells[cell].is_none()
    }

    /// Paint `mark` into an empty cell.
    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), MoveRejection> {
        match self.cells.get(cell) {
            None => Err(MoveRejection::OutOfRange(cell)),
            Some(Some(_)) => Err(MoveRejection::Occupied(cell)),
            Some(None) => {
                self.cells[cell] = Some(mark);
                Ok(())
            }
        }
    }

    /// Indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cells holding a mark.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Same board with every Human mark turned into an Opponent mark and back.
    pub fn swapped(&self) -> Self {
        Self {
            cells: self.cells.map(|c| c.map(Mark::opposite)),
        }
    }

    /// Raw cell contents, row-major.
    pub fn cells(&self) -> &[Option<Mark>; NUM_CELLS] {
        &self.cells
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 9 cells, found {0}")]
    WrongLength(usize),

    #[error("unexpected character {0:?}")]
    BadCell(char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse nine cells written as `X`, `O` and `_` (or `.`), ignoring whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_CELLS {
            return Err(ParseBoardError::WrongLength(symbols.len()));
        }

        let mut cells = [None; NUM_CELLS];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol.to_ascii_uppercase() {
                'X' => Some(Mark::Human),
                'O' => Some(Mark::Opponent),
                '_' | '.' => None,
                other => return Err(ParseBoardError::BadCell(other)),
            };
        }
        Ok(Self { cells })
    }
}
