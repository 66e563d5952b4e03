//! Custom error types for the pocket-solver crate.

use thiserror::Error;

use super::models::{Color, CubeKey};

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum PocketError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The facelet description does not contain exactly 24 colors.
    #[error("Expected 24 facelets, but found {found}")]
    FaceletCount { found: usize },

    /// A facelet uses a letter that is not one of `o r w y g b`.
    #[error("'{0}' is not a valid color")]
    InvalidColor(char),

    /// A color does not appear exactly four times.
    #[error("Color {color} appears {found} times, expected 4")]
    ColorCount { color: Color, found: usize },

    /// The red-yellow-blue corner is not in the bottom-back-right slot.
    #[error("The red-yellow-blue corner must sit bottom-back-right (facelets 15=b, 18=y, 23=r)")]
    FixedCornerMisplaced,

    /// The three colors at a slot do not form any of the seven movable pieces.
    #[error("Colors at position {position} do not match any corner piece")]
    InvalidPiece { position: u8 },

    /// The same piece was found at two different slots.
    #[error("Piece {piece} appears more than once (again at position {position})")]
    DuplicatePiece { piece: u8, position: u8 },

    /// A valid piece shows its colors in an order no legal orientation produces.
    #[error("Piece {piece} cannot be oriented that way at position {position}")]
    InvalidOrientation { piece: u8, position: u8 },

    /// A raw integer lies outside the `21^7` key domain.
    #[error("Key {0} is outside the cube key domain")]
    KeyOutOfRange(u64),

    /// A well-formed key that the state table does not know about.
    #[error("Cube state {0} is unreachable from the solved cube")]
    Unreachable(CubeKey),

    /// Following recovery moves did not reach the solved cube in time.
    #[error("Cube state {key} did not solve within {bound} moves; the table is corrupt")]
    SolveBoundExceeded { key: CubeKey, bound: usize },

    /// The breadth-first build produced an inconsistent table.
    #[error("State table build failed integrity check: {0}")]
    BuildIntegrityFailure(String),

    /// The work queue reached its capacity.
    #[error("Work queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    /// A persisted move code outside `1..=6`.
    #[error("Unknown turn code: {0}")]
    UnknownTurnCode(u8),

    /// A turn label that does not name a generator.
    #[error("Unknown turn '{0}'; expected one of FC FCC LC LCC TC TCC")]
    UnknownTurn(String),

    /// The table file is structurally invalid.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A declared count of items does not match the actual number of items found.
    #[error("Count mismatch for {item_type}: expected {expected}, but found {found}")]
    CountMismatch {
        item_type: &'static str,
        expected: u64,
        found: u64,
    },
}

/// A convenience `Result` type alias using the crate's `PocketError` type.
pub type Result<T> = std::result::Result<T, PocketError>;
