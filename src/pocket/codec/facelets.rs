//! The 24-facelet text form of a cube.
//!
//! Facelets are numbered face by face on the unfolded cube:
//!
//! ```text
//!             |00|01|
//!             |02|03|
//!
//!     |04|05| |08|09| |12|13| |16|17|
//!     |06|07| |10|11| |14|15| |18|19|
//!
//!             |20|21|
//!             |22|23|
//! ```
//!
//! Top, left, front, right, back and bottom in that order. The solved cube
//! reads `oooo gggg wwww bbbb yyyy rrrr`. The red-yellow-blue corner must sit
//! bottom-back-right, so facelets 15, 18 and 23 are always `b`, `y` and `r`.

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::{encode, materialize, SlotColors};
use crate::pocket::types::error::{PocketError, Result};
use crate::pocket::types::models::{Color, CubeKey, PIECE_COUNT};

/// Number of stickers on a 2x2x2 cube.
pub const FACELET_COUNT: usize = 24;

/// Facelet indices of each corner slot, as (top/bottom, front/back, left/right).
/// Slot 7 is the fixed corner.
pub const SLOT_FACELETS: [[usize; 3]; PIECE_COUNT + 1] = [
    [2, 8, 5],
    [20, 10, 7],
    [3, 9, 12],
    [21, 11, 14],
    [0, 17, 4],
    [22, 19, 6],
    [1, 16, 13],
    [23, 18, 15],
];

const FIXED_CORNER: [(usize, Color); 3] =
    [(15, Color::Blue), (18, Color::Yellow), (23, Color::Red)];

/// A validated sticker layout.
///
/// Construction guarantees 24 stickers, four of each color, and the fixed
/// corner in place. Piece and orientation checks happen in [`Facelets::to_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facelets([Color; FACELET_COUNT]);

impl Facelets {
    /// Validates a raw sticker array.
    pub fn new(colors: [Color; FACELET_COUNT]) -> Result<Self> {
        for color in Color::ALL {
            let found = colors.iter().filter(|&&c| c == color).count();
            if found != 4 {
                return Err(PocketError::ColorCount { color, found });
            }
        }
        if FIXED_CORNER.iter().any(|&(index, color)| colors[index] != color) {
            return Err(PocketError::FixedCornerMisplaced);
        }
        Ok(Self(colors))
    }

    /// The stickers of a key, or `None` if the key places two pieces in one slot.
    pub fn from_key(key: CubeKey) -> Option<Self> {
        let slots = super::slot_colors(key)?;
        let mut colors = [Color::Orange; FACELET_COUNT];
        for (slot, facelets) in slots.iter().zip(SLOT_FACELETS.iter()) {
            for (&color, &index) in slot.iter().zip(facelets.iter()) {
                colors[index] = color;
            }
        }
        for (index, color) in FIXED_CORNER {
            colors[index] = color;
        }
        Some(Self(colors))
    }

    pub fn colors(&self) -> &[Color; FACELET_COUNT] {
        &self.0
    }

    /// Colors at each movable slot, indexed by position.
    pub fn slots(&self) -> [SlotColors; PIECE_COUNT] {
        std::array::from_fn(|position| SLOT_FACELETS[position].map(|index| self.0[index]))
    }

    /// Encodes the stickers into a cube key.
    ///
    /// # Errors
    /// `InvalidPiece`, `DuplicatePiece` or `InvalidOrientation` from the codec.
    pub fn to_key(&self) -> Result<CubeKey> {
        let key = encode(&self.slots())?;
        debug!("Facelets {} encode to key {}", self, key);
        Ok(key)
    }

    /// The unfolded-net drawing of these stickers.
    pub fn net(&self) -> Net {
        Net(self.0.map(Some))
    }
}

impl FromStr for Facelets {
    type Err = PocketError;

    /// Parses `o r w y g b` letters, ignoring whitespace and case.
    fn from_str(s: &str) -> Result<Self> {
        let colors = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Color::try_from)
            .collect::<Result<Vec<_>>>()?;
        let found = colors.len();
        let colors: [Color; FACELET_COUNT] = colors
            .try_into()
            .map_err(|_| PocketError::FaceletCount { found })?;
        Self::new(colors)
    }
}

impl fmt::Display for Facelets {
    /// Writes the compact form, one group of four letters per face.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, face) in self.0.chunks(4).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            for color in face {
                write!(f, "{}", color.letter())?;
            }
        }
        Ok(())
    }
}

/// An unfolded-net drawing of a cube.
///
/// Unlike [`Facelets`] it can show any key, including ones that describe no
/// physical cube: stickers of an empty slot print as `-`, and when two pieces
/// share a slot the higher-numbered one is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Net([Option<Color>; FACELET_COUNT]);

impl Net {
    pub fn from_key(key: CubeKey) -> Self {
        let mut stickers = [None; FACELET_COUNT];
        for placed in materialize(key) {
            let facelets = SLOT_FACELETS[placed.position() as usize];
            for (&color, index) in placed.colors.iter().zip(facelets) {
                stickers[index] = Some(color);
            }
        }
        for (index, color) in FIXED_CORNER {
            stickers[index] = Some(color);
        }
        Self(stickers)
    }

    fn cell(&self, index: usize) -> char {
        self.0[index].map_or('-', Color::letter)
    }
}

impl fmt::Display for Net {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = |i| self.cell(i);
        writeln!(f, "      |{}|{}|", c(0), c(1))?;
        writeln!(f, "      |{}|{}|", c(2), c(3))?;
        writeln!(f)?;
        for row in [[4, 5, 8, 9, 12, 13, 16, 17], [6, 7, 10, 11, 14, 15, 18, 19]] {
            for (i, pair) in row.chunks(2).enumerate() {
                let gap = if i == 0 { "" } else { " " };
                write!(f, "{}|{}|{}|", gap, c(pair[0]), c(pair[1]))?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "      |{}|{}|", c(20), c(21))?;
        write!(f, "      |{}|{}|", c(22), c(23))
    }
}
