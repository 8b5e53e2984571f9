//! Validated board coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A cell on the board with `row` and `col` both in `0..3`.
///
/// Raw coordinates submitted by players are untrusted; a `Cell` only
/// exists once they have been checked with [`Cell::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ];

    /// Checks raw coordinates, returning `None` when either is out of range.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Creates a cell from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Cell::new(3, 0).is_none());
        assert!(Cell::new(0, 3).is_none());
        assert!(Cell::new(usize::MAX, 1).is_none());
    }

    #[test]
    fn test_index_matches_all() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }
}
