use proptest::prelude::*;

use crate::domain::board::{mark, reset, winner, BoardState, Player, CELLS, LINES};

fn apply(moves: &[usize]) -> BoardState {
    moves
        .iter()
        .fold(BoardState::new(), |state, &cell| mark(state, cell))
}

proptest! {
    #[test]
    fn winner_requires_a_complete_line(moves in proptest::collection::vec(0usize..CELLS, 0..40)) {
        let state = apply(&moves);
        match winner(&state) {
            Some(player) => prop_assert!(
                LINES.iter().any(|&[a, b, c]| {
                    state.cells[a] == Some(player)
                        && state.cells[b] == Some(player)
                        && state.cells[c] == Some(player)
                }),
                "winner implies a complete line"
            ),
            None => prop_assert!(
                !LINES.iter().any(|&[a, b, c]| {
                    state.cells[a].is_some()
                        && state.cells[a] == state.cells[b]
                        && state.cells[b] == state.cells[c]
                }),
                "no winner implies no complete line"
            ),
        }
    }

    #[test]
    fn mark_counts_stay_balanced(moves in proptest::collection::vec(0usize..CELLS, 0..40)) {
        let state = apply(&moves);
        let x = state.cells.iter().filter(|c| **c == Some(Player::X)).count();
        let o = state.cells.iter().filter(|c| **c == Some(Player::O)).count();

        // X moves first, so the counts never drift more than one apart.
        prop_assert!(x == o || x == o + 1);

        if winner(&state).is_none() {
            prop_assert_eq!(state.next_player, if x == o { Player::X } else { Player::O });
        }
    }

    #[test]
    fn reset_always_yields_the_initial_state(moves in proptest::collection::vec(0usize..CELLS, 0..40)) {
        let state = apply(&moves);
        prop_assert_eq!(reset(state), BoardState::new());
    }
}
