//! Win detection.

use super::super::{Board, Cell, Player, Square};
use tracing::instrument;

/// Result of checking one player's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCheck {
    /// The player holds a complete line.
    Won,
    /// No complete line for the player.
    NotWon,
}

/// The eight winning lines as row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

fn square_at(board: &Board, index: usize) -> Square {
    Cell::from_index(index).map_or(Square::Empty, |cell| board.get(cell))
}

/// Checks rows, columns and both diagonals for three of `player`'s marks.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, player: Player) -> LineCheck {
    let mark = Square::Occupied(player);
    let won = LINES
        .iter()
        .any(|line| line.iter().all(|&i| square_at(board, i) == mark));

    if won { LineCheck::Won } else { LineCheck::NotWon }
}

/// Returns the player holding a complete line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| evaluate(board, *player) == LineCheck::Won)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, player: Player, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            board.place(Cell::new(r, c).unwrap(), player).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(evaluate(&board, Player::X), LineCheck::NotWon);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        mark(&mut board, Player::X, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(evaluate(&board, Player::X), LineCheck::Won);
        assert_eq!(evaluate(&board, Player::O), LineCheck::NotWon);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        mark(&mut board, Player::O, &[(0, 2), (1, 2), (2, 2)]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        mark(&mut board, Player::O, &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(evaluate(&board, Player::O), LineCheck::Won);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        mark(&mut board, Player::X, &[(0, 0), (0, 1)]);
        mark(&mut board, Player::O, &[(0, 2)]);
        assert_eq!(check_winner(&board), None);
    }
}
