//! Tic-tac-toe: a pure two-player state machine.
//!
//! State is a single owned value; `mark` and `reset` are transitions that
//! take a state and return the next one. Nothing here persists or blocks;
//! boards live only as long as one interactive session.

use serde::Serialize;

/// The two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

pub const CELLS: usize = 9;

/// The eight winning triples: three rows, three columns, two diagonals.
/// `winner` scans them in exactly this order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Full game state: the board plus whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardState {
    pub cells: [Option<Player>; CELLS],
    pub next_player: Player,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
            next_player: Player::X,
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the current player's mark to `cell` and hand the turn over.
///
/// Returns the state unchanged when the cell is out of range, already
/// occupied, or the game already has a winner.
pub fn mark(state: BoardState, cell: usize) -> BoardState {
    if cell >= CELLS || state.cells[cell].is_some() || winner(&state).is_some() {
        return state;
    }

    let mut next = state;
    next.cells[cell] = Some(state.next_player);
    next.next_player = state.next_player.other();
    next
}

/// The winning player, if some line is fully occupied by one symbol.
///
/// Triples are scanned in the fixed [`LINES`] order; the first complete one
/// decides.
pub fn winner(state: &BoardState) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Some(player) = state.cells[a] {
            if state.cells[b] == Some(player) && state.cells[c] == Some(player) {
                return Some(player);
            }
        }
    }
    None
}

/// Clear the board; X moves first again.
pub fn reset(_state: BoardState) -> BoardState {
    BoardState::new()
}
