//! Render collaborators.
//!
//! Rendering happens after a move is accepted, from the mover's strand and
//! outside the gate's lock. Frames from the two strands may arrive one move
//! late; each frame is still a consistent snapshot.

use crate::gate::Snapshot;
use crossterm::{cursor, execute, terminal};
use std::io::Write;
use tracing::warn;

/// Produces a human-viewable view of a snapshot.
pub trait Render: Send + Sync {
    /// Renders one frame.
    fn render(&self, snapshot: &Snapshot);
}

/// Renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Render for NullRenderer {
    fn render(&self, _snapshot: &Snapshot) {}
}

/// Prints the board to stdout, optionally clearing the terminal first.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleRenderer {
    clear: bool,
}

impl ConsoleRenderer {
    /// Renderer that clears the screen before each frame.
    pub fn new() -> Self {
        Self { clear: true }
    }

    /// Renderer that appends frames without clearing.
    pub fn plain() -> Self {
        Self { clear: false }
    }

    fn draw(&self, out: &mut impl Write, snapshot: &Snapshot) -> std::io::Result<()> {
        if self.clear {
            execute!(
                out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        write!(out, "{}", frame(snapshot))?;
        out.flush()
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for ConsoleRenderer {
    fn render(&self, snapshot: &Snapshot) {
        // Holding the stdout lock keeps frames from the two strands whole.
        let mut out = std::io::stdout().lock();
        if let Err(error) = self.draw(&mut out, snapshot) {
            warn!(%error, "Failed to render board");
        }
    }
}

/// Text of one frame: the board followed by the player who just moved.
///
/// Before the first move there is no mover, so the player to move is shown.
pub fn frame(snapshot: &Snapshot) -> String {
    let shown = snapshot
        .last_move
        .map_or(snapshot.active_player, |mov| mov.player);
    format!("{}\nCurrent player: {}\n", snapshot.board, shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::TurnGate;
    use strictly_board::{Board, Move, Player, Status};

    #[test]
    fn test_frame_layout() {
        let gate = TurnGate::new();
        let accepted = gate.submit_move(Move::new(Player::X, 1, 1)).unwrap();
        let text = frame(&accepted.snapshot);
        assert!(text.contains("  | X |  \n"));
        assert!(text.ends_with("Current player: X\n"));
    }

    #[test]
    fn test_final_frame_shows_winner_as_mover() {
        let gate = TurnGate::new();
        for (player, row, col) in [
            (Player::X, 0, 0),
            (Player::O, 1, 0),
            (Player::X, 0, 1),
            (Player::O, 1, 1),
        ] {
            gate.submit_move(Move::new(player, row, col)).unwrap();
        }
        let accepted = gate.submit_move(Move::new(Player::X, 0, 2)).unwrap();
        assert_eq!(accepted.status, Status::Won(Player::X));
        assert_eq!(accepted.snapshot.active_player, Player::O);
        assert!(frame(&accepted.snapshot).ends_with("Current player: X\n"));
    }

    #[test]
    fn test_plain_console_writes_frame() {
        let snapshot = Snapshot {
            board: Board::new(),
            active_player: Player::X,
            status: Status::InProgress,
            moves: 0,
            last_move: None,
        };
        let mut out = Vec::new();
        ConsoleRenderer::plain().draw(&mut out, &snapshot).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), frame(&snapshot));
    }
}
