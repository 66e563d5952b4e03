//! State codec: cube description ↔ cube key.
//!
//! The codec works on the seven movable slots. Each slot is described by the
//! three colors it shows, in (top/bottom, front/back, left/right) order.
//!
//! # Submodules
//!
//! - [`orientation`][]: piece identities and the per-class orientation tables
//! - [`facelets`][]: the 24-facelet text form of a cube
//!
//! Encoding validates as it goes:
//! 1. the colors at each slot must form one of the seven movable pieces
//!    (`InvalidPiece`), each piece exactly once (`DuplicatePiece`);
//! 2. the color order must be one of the three legal orientations of that
//!    piece at that slot (`InvalidOrientation`).
//!
//! A successful encode does not prove reachability: a single corner twisted
//! in place still encodes. Only the state table knows which keys are
//! reachable.

pub mod facelets;
pub mod orientation;

use log::trace;

use crate::pocket::types::error::{PocketError, Result};
use crate::pocket::types::models::{Color, CubeKey, PieceState, PIECE_COUNT};
use orientation::{colors_in_state, identify_piece, match_orientation};

/// The colors showing at one slot, in (top/bottom, front/back, left/right) order.
pub type SlotColors = [Color; 3];

/// A piece resolved to its slot and the colors it shows there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub piece: u8,
    pub state: PieceState,
    pub colors: SlotColors,
}

impl PlacedPiece {
    pub fn position(&self) -> u8 {
        self.state.position()
    }
}

/// Encodes the colors seen at the seven movable slots into a key.
///
/// `slots[p]` holds the colors at position `p`.
///
/// # Errors
/// - `InvalidPiece` if a slot's colors match no movable piece
/// - `DuplicatePiece` if two slots hold the same piece
/// - `InvalidOrientation` if a piece shows its colors in an impossible order
pub fn encode(slots: &[SlotColors; PIECE_COUNT]) -> Result<CubeKey> {
    let mut states = [PieceState::from_raw(0); PIECE_COUNT];
    let mut placed = [false; PIECE_COUNT];

    for (position, colors) in (0u8..).zip(slots.iter()) {
        let piece = identify_piece(colors).ok_or(PocketError::InvalidPiece { position })?;
        if std::mem::replace(&mut placed[piece as usize], true) {
            return Err(PocketError::DuplicatePiece { piece, position });
        }
        let state = match_orientation(piece, position, colors)
            .ok_or(PocketError::InvalidOrientation { piece, position })?;
        trace!("Position {} holds piece {} in state {}", position, piece, state.index());
        states[piece as usize] = state;
    }

    // Seven distinct pieces over seven slots: every piece was placed.
    Ok(CubeKey::from_states(states))
}

/// Decodes a key into the state of each piece, piece 0 first.
///
/// Succeeds for any key; reachability is not checked.
pub fn decode(key: CubeKey) -> [PieceState; PIECE_COUNT] {
    key.states()
}

/// Decodes a key and attaches the concrete colors each piece shows.
pub fn materialize(key: CubeKey) -> [PlacedPiece; PIECE_COUNT] {
    let states = decode(key);
    std::array::from_fn(|piece| {
        let state = states[piece];
        PlacedPiece {
            piece: piece as u8,
            state,
            colors: colors_in_state(piece as u8, state),
        }
    })
}

/// Slot colors of a key, indexed by position.
///
/// Returns `None` if two pieces claim the same slot, which happens for
/// keys that describe no physical cube.
pub fn slot_colors(key: CubeKey) -> Option<[SlotColors; PIECE_COUNT]> {
    let mut slots: [Option<SlotColors>; PIECE_COUNT] = [None; PIECE_COUNT];
    for placed in materialize(key) {
        let slot = &mut slots[placed.position() as usize];
        if slot.replace(placed.colors).is_some() {
            return None;
        }
    }
    let mut resolved = [[Color::Orange; 3]; PIECE_COUNT];
    for (out, slot) in resolved.iter_mut().zip(slots) {
        *out = slot?;
    }
    Some(resolved)
}
