//! Generator moves acting directly on cube keys.
//!
//! A quarter turn moves every piece independently: a piece's new sub-state
//! depends only on its old one. Each generator is therefore one 21-entry
//! transition row applied to all seven digits of the key. Pieces outside the
//! turned face map to themselves.

use super::types::models::{CubeKey, PieceState};
use super::types::turn::Turn;

/// Transition rows, one per [`Turn`] in declaration order.
///
/// `TRANSITIONS[turn][s]` is the sub-state a piece in sub-state `s` moves to.
pub(crate) const TRANSITIONS: [[u8; 21]; 6] = [
    // front clockwise
    [8, 6, 7, 2, 0, 1, 10, 11, 9, 4, 5, 3, 12, 13, 14, 15, 16, 17, 18, 19, 20],
    // front counterclockwise
    [4, 5, 3, 11, 9, 10, 1, 2, 0, 8, 6, 7, 12, 13, 14, 15, 16, 17, 18, 19, 20],
    // left clockwise
    [5, 3, 4, 16, 17, 15, 6, 7, 8, 9, 10, 11, 2, 0, 1, 13, 14, 12, 18, 19, 20],
    // left counterclockwise
    [13, 14, 12, 1, 2, 0, 6, 7, 8, 9, 10, 11, 17, 15, 16, 5, 3, 4, 18, 19, 20],
    // top clockwise
    [14, 12, 13, 3, 4, 5, 2, 0, 1, 9, 10, 11, 19, 20, 18, 15, 16, 17, 7, 8, 6],
    // top counterclockwise
    [7, 8, 6, 3, 4, 5, 20, 18, 19, 9, 10, 11, 1, 2, 0, 15, 16, 17, 14, 12, 13],
];

/// Applies one generator to a key.
///
/// Total on the whole key domain; the result is again a valid key.
pub fn apply(key: CubeKey, turn: Turn) -> CubeKey {
    let row = turn.transitions();
    let mut states = key.states();
    for state in states.iter_mut() {
        *state = PieceState::from_raw(row[state.index() as usize]);
    }
    CubeKey::from_states(states)
}

/// Applies a sequence of turns from left to right.
pub fn apply_all<I>(key: CubeKey, turns: I) -> CubeKey
where
    I: IntoIterator<Item = Turn>,
{
    turns.into_iter().fold(key, apply)
}

/// All six neighbors of a key, paired with the turn that reaches them.
pub fn neighbors(key: CubeKey) -> [(Turn, CubeKey); 6] {
    Turn::ALL.map(|turn| (turn, apply(key, turn)))
}

/// Returns `true` if every transition row is a permutation of `0..21`.
pub fn transitions_are_permutations() -> bool {
    TRANSITIONS.iter().all(|row| {
        let mut sorted = *row;
        sorted.sort_unstable();
        sorted.iter().enumerate().all(|(i, &s)| i == s as usize)
    })
}

/// Returns `true` if each generator composed with its inverse is the identity
/// on every piece sub-state.
pub fn inverses_are_consistent() -> bool {
    Turn::ALL.iter().all(|&turn| {
        let forward = turn.transitions();
        let backward = turn.inverse().transitions();
        (0..21).all(|s| backward[forward[s] as usize] as usize == s)
    })
}
