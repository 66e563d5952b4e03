//! The six generator quarter turns.

use std::fmt;
use std::str::FromStr;

use super::error::{PocketError, Result};
use super::models::CubeKey;
use crate::pocket::moves;

/// A quarter turn of the front, left or top face.
///
/// Directions are as seen looking straight at the turned face. The bottom,
/// back and right faces are never turned so the red-yellow-blue corner stays
/// put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    FrontCw,
    FrontCcw,
    LeftCw,
    LeftCcw,
    TopCw,
    TopCcw,
}

impl Turn {
    /// All generators, in the order the table builder expands them.
    pub const ALL: [Turn; 6] = [
        Turn::FrontCw,
        Turn::FrontCcw,
        Turn::LeftCw,
        Turn::LeftCcw,
        Turn::TopCw,
        Turn::TopCcw,
    ];

    /// The turn that undoes this one.
    pub fn inverse(self) -> Turn {
        match self {
            Turn::FrontCw => Turn::FrontCcw,
            Turn::FrontCcw => Turn::FrontCw,
            Turn::LeftCw => Turn::LeftCcw,
            Turn::LeftCcw => Turn::LeftCw,
            Turn::TopCw => Turn::TopCcw,
            Turn::TopCcw => Turn::TopCw,
        }
    }

    /// Applies this turn to a cube key.
    pub fn apply(self, key: CubeKey) -> CubeKey {
        moves::apply(key, self)
    }

    /// Per-piece transition row of this turn, indexed by piece state.
    pub fn transitions(self) -> &'static [u8; 21] {
        &moves::TRANSITIONS[self as usize]
    }

    /// Persisted code of this turn when stored as a recovery move.
    ///
    /// Codes name the turn being undone: 1 undoes a front clockwise turn, so
    /// it stands for `FrontCcw`.
    ///
    /// | code | undoes | applies |
    /// |------|--------|---------|
    /// | 1 | FC  | FCC |
    /// | 2 | FCC | FC  |
    /// | 3 | LC  | LCC |
    /// | 4 | LCC | LC  |
    /// | 5 | TC  | TCC |
    /// | 6 | TCC | TC  |
    pub fn code(self) -> u8 {
        match self {
            Turn::FrontCcw => 1,
            Turn::FrontCw => 2,
            Turn::LeftCcw => 3,
            Turn::LeftCw => 4,
            Turn::TopCcw => 5,
            Turn::TopCw => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Turn::FrontCw => "FC",
            Turn::FrontCcw => "FCC",
            Turn::LeftCw => "LC",
            Turn::LeftCcw => "LCC",
            Turn::TopCw => "TC",
            Turn::TopCcw => "TCC",
        }
    }

    /// Parses a whitespace-separated list of turn labels.
    pub fn parse_sequence(s: &str) -> Result<Vec<Turn>> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl TryFrom<u8> for Turn {
    type Error = PocketError;
    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::FrontCcw),
            2 => Ok(Self::FrontCw),
            3 => Ok(Self::LeftCcw),
            4 => Ok(Self::LeftCw),
            5 => Ok(Self::TopCcw),
            6 => Ok(Self::TopCw),
            _ => Err(PocketError::UnknownTurnCode(code)),
        }
    }
}

impl FromStr for Turn {
    type Err = PocketError;
    fn from_str(s: &str) -> Result<Self> {
        Turn::ALL
            .into_iter()
            .find(|turn| turn.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| PocketError::UnknownTurn(s.to_string()))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
