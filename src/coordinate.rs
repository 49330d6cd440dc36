//! Board positions.

use core::fmt;

/// A (row, column) position, zero-based.
///
/// Construction never checks bounds; the board decides whether a position is on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by a (row, column) delta.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Grid indices of this position on an `n`×`n` grid, or `None` when it is off the grid.
    pub fn grid_index(self, n: usize) -> Option<(usize, usize)> {
        let in_range = |v: i32| v >= 0 && (v as usize) < n;
        if in_range(self.row) && in_range(self.col) {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// The position itself and its eight neighbours, row by row.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

/// Formats in the one-based `row col` notation players type.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
