//! Fundamental grid types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords;

/// A cell on the square board. Row 0 is the top row, column 0 the leftmost.
///
/// Signed so that shape offsets can be applied before bounds are checked.
/// Ordering is lexicographic `(row, col)`, which is also the row-major scan
/// order used for deterministic tie-breaking.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

/// Orthogonal unit steps in probe order: up, down, left, right.
pub const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by a row/column delta.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Whether the position lies in `[0, board_size)²`.
    pub fn in_bounds(&self, board_size: i32) -> bool {
        (0..board_size).contains(&self.row) && (0..board_size).contains(&self.col)
    }

    pub fn manhattan_to(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// In-bounds orthogonal neighbours, in up/down/left/right order.
    pub fn neighbors(self, board_size: i32) -> impl Iterator<Item = Position> {
        ORTHOGONAL_STEPS
            .into_iter()
            .map(move |(dr, dc)| self.offset(dr, dc))
            .filter(move |p| p.in_bounds(board_size))
    }

    /// Whether the position sits on the outer ring of the board.
    pub fn is_edge(&self, board_size: i32) -> bool {
        self.row == 0 || self.row == board_size - 1 || self.col == 0 || self.col == board_size - 1
    }

    /// Whether the position is one of the four board corners.
    pub fn is_corner(&self, board_size: i32) -> bool {
        (self.row == 0 || self.row == board_size - 1)
            && (self.col == 0 || self.col == board_size - 1)
    }

    /// Parse a human-readable coordinate such as `"1A"` or `"10Z"`.
    pub fn parse_coordinate(text: &str) -> Option<Position> {
        coords::coordinate_to_position(text)
    }

    /// Iterate every cell of a board in row-major order.
    pub fn all(board_size: i32) -> impl Iterator<Item = Position> {
        (0..board_size).flat_map(move |row| (0..board_size).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&coords::position_to_coordinate(*self))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
