//! Piece identities and orientation tables.
//!
//! Every corner shows one color per axis, listed as (top/bottom, front/back,
//! left/right). Of the six orders three colors can appear in, only three are
//! physically possible at a given slot, and which three depends on the slot.
//!
//! Corners split into two parity classes: pieces 0, 3, 5, 6 and pieces 1, 2,
//! 4, 7. Within a class, swapping green/blue, white/yellow or orange/red
//! yields another piece of the same class, so one table per class maps a
//! piece state to the axis order of its colors.

use crate::pocket::types::models::{Color, PieceState, PIECE_COUNT};

/// Colors of each corner piece, indexed by piece, in (top/bottom,
/// front/back, left/right) order when solved. Piece 7 is the fixed corner.
pub const PIECE_COLORS: [[Color; 3]; PIECE_COUNT + 1] = {
    use Color::*;
    [
        [Orange, White, Green],
        [Red, White, Green],
        [Orange, White, Blue],
        [Red, White, Blue],
        [Orange, Yellow, Green],
        [Red, Yellow, Green],
        [Orange, Yellow, Blue],
        [Red, Yellow, Blue],
    ]
};

/// The two corner parity classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityClass {
    /// Pieces 0, 3, 5 and 6.
    A,
    /// Pieces 1, 2, 4 and the fixed piece 7.
    B,
}

impl ParityClass {
    pub fn of_piece(piece: u8) -> ParityClass {
        match piece {
            0 | 3 | 5 | 6 => ParityClass::A,
            _ => ParityClass::B,
        }
    }

    /// Axis order of the piece's colors for each piece state.
    ///
    /// `table()[state][face]` is the axis index of the color shown on `face`
    /// (0 top/bottom, 1 front/back, 2 left/right).
    pub fn table(self) -> &'static [[u8; 3]; 21] {
        match self {
            ParityClass::A => &CLASS_A,
            ParityClass::B => &CLASS_B,
        }
    }

    /// Axis order of colors for a piece of this class in `state`.
    pub fn axes(self, state: PieceState) -> [u8; 3] {
        self.table()[state.index() as usize]
    }
}

// Anchored on piece 0 having orientation 0 when solved.
#[rustfmt::skip]
const CLASS_A: [[u8; 3]; 21] = [
    [0, 1, 2], [2, 0, 1], [1, 2, 0],
    [0, 2, 1], [2, 1, 0], [1, 0, 2],
    [1, 0, 2], [0, 2, 1], [2, 1, 0],
    [0, 1, 2], [2, 0, 1], [1, 2, 0],
    [2, 1, 0], [1, 0, 2], [0, 2, 1],
    [0, 1, 2], [2, 0, 1], [1, 2, 0],
    [0, 1, 2], [2, 0, 1], [1, 2, 0],
];

// Anchored on piece 2 having orientation 0 when solved. Rows at each
// position are the three cyclic rotations of one order, matching the way a
// quarter turn carries stickers between slots.
#[rustfmt::skip]
const CLASS_B: [[u8; 3]; 21] = [
    [1, 0, 2], [2, 1, 0], [0, 2, 1],
    [1, 2, 0], [2, 0, 1], [0, 1, 2],
    [0, 1, 2], [1, 2, 0], [2, 0, 1],
    [1, 0, 2], [2, 1, 0], [0, 2, 1],
    [2, 0, 1], [0, 1, 2], [1, 2, 0],
    [1, 0, 2], [2, 1, 0], [0, 2, 1],
    [1, 0, 2], [2, 1, 0], [0, 2, 1],
];

/// Finds the movable piece whose color set equals `colors`, in any order.
pub fn identify_piece(colors: &[Color; 3]) -> Option<u8> {
    PIECE_COLORS[..PIECE_COUNT]
        .iter()
        .position(|piece| piece.iter().all(|c| colors.contains(c)))
        .map(|piece| piece as u8)
}

/// Finds the orientation of `piece` at `position` showing `colors`.
///
/// Returns `None` if the color order is not one of the three legal ones.
pub fn match_orientation(piece: u8, position: u8, colors: &[Color; 3]) -> Option<PieceState> {
    let observed = colors.map(Color::axis);
    let class = ParityClass::of_piece(piece);
    (0..3)
        .filter_map(|orientation| PieceState::new(position, orientation))
        .find(|&state| class.axes(state) == observed)
}

/// Colors `piece` shows on its three faces when in `state`.
pub fn colors_in_state(piece: u8, state: PieceState) -> [Color; 3] {
    let axes = ParityClass::of_piece(piece).axes(state);
    let identity = PIECE_COLORS[piece as usize];
    axes.map(|axis| identity[axis as usize])
}
