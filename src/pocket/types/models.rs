//! Core data structures for the pocket cube state space.
//!
//! This module defines the fundamental types used throughout the library:
//! - Facelet colors and their axis normalization
//! - Per-piece sub-states and the dense mixed-radix cube key
//! - The fixed constants of the 2x2x2 state space

use std::fmt;

use super::error::{PocketError, Result};

/// Number of movable corner pieces. The eighth corner never moves.
pub const PIECE_COUNT: usize = 7;

/// Number of (position, orientation) sub-states a single piece can take.
pub const PIECE_STATES: u32 = 21;

/// Size of the key domain, `21^7`.
pub const KEY_SPACE: u32 = 1_801_088_541;

/// Number of cube states reachable from the solved cube.
pub const REACHABLE_STATES: usize = 3_674_160;

/// Number of entries in a complete state table (every reachable state but solved).
pub const TABLE_ENTRIES: usize = REACHABLE_STATES - 1;

/// Longest optimal solution in the quarter-turn metric.
pub const MAX_SOLUTION_LENGTH: usize = 14;

/// Positional weights of the mixed-radix key, `21^i` for piece `i`.
pub const KEY_WEIGHTS: [u32; PIECE_COUNT] = [1, 21, 441, 9_261, 194_481, 4_084_101, 85_766_121];

/// Piece states of the solved cube, indexed by piece.
pub const SOLVED_STATES: [u8; PIECE_COUNT] = [0, 5, 6, 9, 13, 15, 18];

/// The key of the solved cube.
pub const SOLVED_KEY: CubeKey = CubeKey(0x5FD3_097E);

/// One of the six sticker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Orange,
    Red,
    White,
    Yellow,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Orange,
        Color::Red,
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
    ];

    /// Returns the single-letter code used in facelet strings.
    pub fn letter(self) -> char {
        match self {
            Color::Orange => 'o',
            Color::Red => 'r',
            Color::White => 'w',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Blue => 'b',
        }
    }

    /// Returns the normalized axis index of this color.
    ///
    /// Opposite faces share an index:
    /// - orange/red: 0 (top/bottom)
    /// - white/yellow: 1 (front/back)
    /// - green/blue: 2 (left/right)
    pub fn axis(self) -> u8 {
        match self {
            Color::Orange | Color::Red => 0,
            Color::White | Color::Yellow => 1,
            Color::Green | Color::Blue => 2,
        }
    }
}

impl TryFrom<char> for Color {
    type Error = PocketError;
    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'o' => Ok(Self::Orange),
            'r' => Ok(Self::Red),
            'w' => Ok(Self::White),
            'y' => Ok(Self::Yellow),
            'g' => Ok(Self::Green),
            'b' => Ok(Self::Blue),
            _ => Err(PocketError::InvalidColor(c)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Color::Orange => "orange",
            Color::Red => "red",
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// The (position, orientation) sub-state of one movable piece.
///
/// Encoded as `position * 3 + orientation`, always in `0..21`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceState(u8);

impl PieceState {
    /// Builds a sub-state from its parts. Returns `None` if either is out of range.
    pub fn new(position: u8, orientation: u8) -> Option<Self> {
        if (position as usize) < PIECE_COUNT && orientation < 3 {
            Some(Self(position * 3 + orientation))
        } else {
            None
        }
    }

    /// Builds a sub-state from its raw index. Returns `None` outside `0..21`.
    pub fn from_index(index: u8) -> Option<Self> {
        ((index as u32) < PIECE_STATES).then_some(Self(index))
    }

    /// Wraps an index already known to be below 21.
    pub(crate) fn from_raw(index: u8) -> Self {
        debug_assert!((index as u32) < PIECE_STATES);
        Self(index)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn position(self) -> u8 {
        self.0 / 3
    }

    pub fn orientation(self) -> u8 {
        self.0 % 3
    }
}

/// A whole cube packed into a single integer.
///
/// `key = Σ state[i] * 21^i` over the seven movable pieces. Every value in
/// `0..KEY_SPACE` decodes to seven piece states; only `REACHABLE_STATES` of
/// them describe a physically reachable cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeKey(u32);

impl CubeKey {
    /// Wraps a raw key, checking it lies inside the key domain.
    pub fn new(raw: u64) -> Result<Self> {
        if raw < KEY_SPACE as u64 {
            Ok(Self(raw as u32))
        } else {
            Err(PocketError::KeyOutOfRange(raw))
        }
    }

    /// Combines seven piece states into a key. Total: every input is in range.
    pub fn from_states(states: [PieceState; PIECE_COUNT]) -> Self {
        let raw = states
            .iter()
            .zip(KEY_WEIGHTS)
            .map(|(state, weight)| state.index() as u32 * weight)
            .sum();
        Self(raw)
    }

    /// Splits the key back into its seven piece states, piece 0 first.
    pub fn states(self) -> [PieceState; PIECE_COUNT] {
        let mut rest = self.0;
        let mut states = [PieceState(0); PIECE_COUNT];
        for state in states.iter_mut() {
            *state = PieceState((rest % PIECE_STATES) as u8);
            rest /= PIECE_STATES;
        }
        states
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_solved(self) -> bool {
        self == SOLVED_KEY
    }
}

impl TryFrom<u32> for CubeKey {
    type Error = PocketError;
    fn try_from(raw: u32) -> Result<Self> {
        Self::new(raw as u64)
    }
}

impl fmt::Display for CubeKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
