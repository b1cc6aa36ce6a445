use crate::domain::board::{mark, reset, winner, BoardState, Player};

fn play(cells: &[usize]) -> BoardState {
    cells
        .iter()
        .fold(BoardState::new(), |state, &cell| mark(state, cell))
}

#[test]
fn alternates_players_starting_with_x() {
    let state = play(&[0, 3]);
    assert_eq!(state.cells[0], Some(Player::X));
    assert_eq!(state.cells[3], Some(Player::O));
    assert_eq!(state.next_player, Player::X);
}

#[test]
fn marking_an_occupied_cell_changes_nothing() {
    let state = play(&[4]);
    let same = mark(state, 4);
    assert_eq!(same, state);
    assert_eq!(same.next_player, Player::O);
}

#[test]
fn marking_out_of_range_changes_nothing() {
    let state = play(&[0]);
    assert_eq!(mark(state, 9), state);
    assert_eq!(mark(state, usize::MAX), state);
}

#[test]
fn top_row_completes_for_x() {
    // X at 0, 1, 2; O at 3, 4.
    let state = play(&[0, 3, 1, 4, 2]);
    assert_eq!(winner(&state), Some(Player::X));
}

#[test]
fn partial_lines_have_no_winner() {
    let state = play(&[0, 3, 1, 4]);
    assert_eq!(winner(&state), None);
}

#[test]
fn marks_after_a_win_are_ignored() {
    let won = play(&[0, 3, 1, 4, 2]);
    let after = mark(won, 5);
    assert_eq!(after, won);
    assert_eq!(winner(&after), Some(Player::X));
}

#[test]
fn columns_and_diagonals_also_win() {
    // O takes the middle column 1, 4, 7.
    let state = play(&[0, 1, 3, 4, 8, 7]);
    assert_eq!(winner(&state), Some(Player::O));

    // X takes the main diagonal 0, 4, 8.
    let state = play(&[0, 1, 4, 2, 8]);
    assert_eq!(winner(&state), Some(Player::X));
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    // X: 0, 1, 5, 6, 8 / O: 2, 3, 4, 7. No triple shares a symbol.
    let state = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert!(state.cells.iter().all(Option::is_some));
    assert_eq!(winner(&state), None);
}

#[test]
fn reset_clears_the_board_and_restores_x() {
    let won = play(&[0, 3, 1, 4, 2]);
    let fresh = reset(won);
    assert_eq!(fresh, BoardState::new());
    assert_eq!(winner(&fresh), None);

    let next = mark(fresh, 8);
    assert_eq!(next.cells[8], Some(Player::X));
}
