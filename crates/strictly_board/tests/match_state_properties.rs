//! Property tests: arbitrary move streams never break match invariants.

use proptest::prelude::*;
use strictly_board::{
    Cell, DuelInvariants, InvariantSet, MatchState, Move, Player, Rejection, Square, Status,
};

fn any_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn any_move() -> impl Strategy<Value = Move> {
    // Coordinates deliberately range past the board edge.
    (any_player(), 0usize..5, 0usize..5).prop_map(|(p, r, c)| Move::new(p, r, c))
}

proptest! {
    #[test]
    fn rejected_moves_never_change_state(moves in prop::collection::vec(any_move(), 0..40)) {
        let mut state = MatchState::new();
        for mov in moves {
            let before = state.clone();
            if state.apply(mov).is_err() {
                prop_assert_eq!(&state, &before);
            }
        }
    }

    #[test]
    fn accepted_moves_alternate_and_flip_turn(moves in prop::collection::vec(any_move(), 0..40)) {
        let mut state = MatchState::new();
        let mut last_mover: Option<Player> = None;
        for mov in moves {
            if state.apply(mov).is_ok() {
                prop_assert_ne!(Some(mov.player), last_mover);
                prop_assert_eq!(state.active_player(), mov.player.opponent());
                last_mover = Some(mov.player);
            }
        }
        prop_assert!(state.history().len() <= 9);
    }

    #[test]
    fn cells_are_write_once(moves in prop::collection::vec(any_move(), 0..40)) {
        let mut state = MatchState::new();
        let mut seen: Vec<Option<Square>> = vec![None; 9];
        for mov in moves {
            let _ = state.apply(mov);
            for cell in Cell::ALL {
                let now = state.board().get(cell);
                match seen[cell.index()] {
                    Some(Square::Occupied(p)) => prop_assert_eq!(now, Square::Occupied(p)),
                    _ => seen[cell.index()] = Some(now),
                }
            }
        }
    }

    #[test]
    fn status_changes_at_most_once(moves in prop::collection::vec(any_move(), 0..40)) {
        let mut state = MatchState::new();
        let mut terminal: Option<Status> = None;
        for mov in moves {
            let _ = state.apply(mov);
            match terminal {
                Some(t) => prop_assert_eq!(state.status(), t),
                None if state.status().is_terminal() => terminal = Some(state.status()),
                None => {}
            }
        }
        prop_assert!(DuelInvariants::check_all(&state).is_ok());
    }
}

#[test]
fn test_classic_draw_pattern() {
    // Final board: X O X / X O O / O X X
    let moves = [
        Move::new(Player::X, 0, 0),
        Move::new(Player::O, 0, 1),
        Move::new(Player::X, 0, 2),
        Move::new(Player::O, 1, 1),
        Move::new(Player::X, 1, 0),
        Move::new(Player::O, 1, 2),
        Move::new(Player::X, 2, 1),
        Move::new(Player::O, 2, 0),
        Move::new(Player::X, 2, 2),
    ];
    let state = MatchState::replay(&moves).expect("legal sequence");
    assert_eq!(state.status(), Status::Draw);
    assert!(DuelInvariants::check_all(&state).is_ok());
}

#[test]
fn test_post_terminal_submission_rejected() {
    let moves = [
        Move::new(Player::X, 0, 0),
        Move::new(Player::O, 1, 0),
        Move::new(Player::X, 0, 1),
        Move::new(Player::O, 1, 1),
        Move::new(Player::X, 0, 2),
    ];
    let mut state = MatchState::replay(&moves).expect("legal sequence");
    assert_eq!(state.status(), Status::Won(Player::X));
    assert_eq!(
        state.apply(Move::new(Player::O, 2, 2)),
        Err(Rejection::GameOver)
    );
}

#[test]
fn test_state_serializes() {
    let state = MatchState::replay(&[Move::new(Player::X, 1, 1)]).unwrap();
    let json = serde_json::to_string(&state).unwrap();
    let back: MatchState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
