//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{MatchState, Player};
use super::Invariant;

/// Invariant: X moves first, no player moves twice in a row, and the
/// active player is never the one who made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchState> for AlternatingTurnInvariant {
    fn holds(state: &MatchState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            return state.active_player() == Player::X;
        };
        if first.player != Player::X {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        history
            .last()
            .is_some_and(|last| state.active_player() == last.player.opponent())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_empty_match_holds() {
        assert!(AlternatingTurnInvariant::holds(&MatchState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let moves = [
            Move::new(Player::X, 0, 0),
            Move::new(Player::O, 1, 1),
            Move::new(Player::X, 0, 2),
            Move::new(Player::O, 2, 0),
            Move::new(Player::X, 2, 2),
        ];
        let state = MatchState::replay(&moves).unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.active_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = MatchState::replay(&[Move::new(Player::X, 0, 0)]).unwrap();
        state.history.push(Move::new(Player::X, 1, 1));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_stale_active_player_violates() {
        let mut state = MatchState::replay(&[Move::new(Player::X, 0, 0)]).unwrap();
        state.active_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
