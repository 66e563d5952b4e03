//! Core pocket cube engine.
//!
//! # Module Organization
//!
//! - [`types`]: keys, piece states, colors, turns and the error type
//! - [`codec`]: cube description ↔ key conversion
//! - [`moves`]: generator turns as pure key → key functions
//! - [`table`]: the sorted recovery-move table and its file format
//! - [`builder`]: breadth-first construction of the table
//! - [`solver`]: following recovery moves back to solved
//!
//! # Data Flow
//!
//! ```text
//! facelets ──codec──▶ CubeKey ──solver──▶ Vec<Turn>
//!                        ▲          │
//!                      moves ◀──────┘
//!                        │
//!   builder ──BFS──▶ StateTable ◀──▶ state_table.bin
//! ```

pub mod builder;
pub mod codec;
pub mod moves;
pub mod queue;
pub mod solver;
pub mod table;
pub mod types;

pub use builder::{build_table, BuildOptions, BuildReport, TableBuilder};
pub use codec::facelets::{Facelets, Net};
pub use solver::{solve, solve_with, verify_table, SolveOptions, Solver};
pub use table::{Entry, StateTable, TableStaging};
pub use types::error::{PocketError, Result};
pub use types::models::{
    Color, CubeKey, PieceState, KEY_SPACE, MAX_SOLUTION_LENGTH, PIECE_COUNT, REACHABLE_STATES,
    SOLVED_KEY, TABLE_ENTRIES,
};
pub use types::turn::Turn;
