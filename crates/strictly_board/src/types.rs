//! Core domain types for the shared board.

use super::position::Cell;
use serde::{Deserialize, Serialize};

/// Participant in a duel.
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
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell value on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has marked this cell yet.
    Empty,
    /// Cell carries a player's mark.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 board. Cells are write-once: [`Board::place`] refuses to overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Square::Empty; 3]; 3],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.rows[cell.row()][cell.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Marks an empty cell for `player`.
    ///
    /// Returns the square that was already there if the cell is occupied;
    /// the board is left untouched in that case.
    pub fn place(&mut self, cell: Cell, player: Player) -> Result<(), Square> {
        match self.rows[cell.row()][cell.col()] {
            Square::Empty => {
                self.rows[cell.row()][cell.col()] = Square::Occupied(player);
                Ok(())
            }
            taken => Err(taken),
        }
    }

    /// Iterates squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Cells that are still empty, in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|cell| self.is_empty(*cell))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.squares().filter(|s| *s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(
                f,
                "{} | {} | {}",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
            if i < 2 {
                writeln!(f, "---------")?;
            }
        }
        Ok(())
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still being accepted.
    InProgress,
    /// The player completed a line.
    Won(Player),
    /// Board filled with no line.
    Draw,
}

impl Status {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(player),
            Status::InProgress | Status::Draw => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "In progress"),
            Status::Won(player) => write!(f, "Player {} wins!", player),
            Status::Draw => write!(f, "Draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_is_write_once() {
        let mut board = Board::new();
        let center = Cell::new(1, 1).unwrap();
        assert!(board.place(center, Player::X).is_ok());
        assert_eq!(
            board.place(center, Player::O),
            Err(Square::Occupied(Player::X))
        );
        assert_eq!(board.get(center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_open_cells_row_major() {
        let mut board = Board::new();
        board.place(Cell::new(0, 0).unwrap(), Player::X).unwrap();
        let open: Vec<_> = board.open_cells().collect();
        assert_eq!(open.len(), 8);
        assert_eq!(open[0], Cell::new(0, 1).unwrap());
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.place(Cell::new(0, 0).unwrap(), Player::X).unwrap();
        board.place(Cell::new(2, 2).unwrap(), Player::O).unwrap();
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "X |   |  ");
        assert_eq!(lines[1], "---------");
        assert_eq!(lines[4], "  |   | O");
    }

    #[test]
    fn test_player_parses_from_name() {
        assert_eq!("X".parse::<Player>(), Ok(Player::X));
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
