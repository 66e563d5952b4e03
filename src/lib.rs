//! # pocket-solver
//!
//! An optimal solver for the 2x2x2 pocket cube.
//!
//! Every cube is packed into a dense integer key. A one-time breadth-first
//! traversal of all 3,674,160 reachable states records, for each state, the
//! quarter turn that brings it one step closer to solved. Solving is then a
//! chain of table lookups, and every solution is as short as possible.
//!
//! ```no_run
//! use pocket_solver::{Facelets, StateTable, Solver};
//! use std::sync::Arc;
//!
//! let table = StateTable::load("state_table.bin").unwrap();
//! let solver = Solver::new(Arc::new(table));
//! let cube: Facelets = "oogg grgr wwww obob yyyy bbrr".parse().unwrap();
//! for turn in solver.solve_facelets(&cube).unwrap() {
//!     println!("{}", turn);
//! }
//! ```
pub mod pocket;

// Re-export the main types for convenience
pub use pocket::{
    build_table, solve, solve_with, verify_table, BuildOptions, BuildReport, Color, CubeKey, Entry,
    Facelets, Net, PocketError, Result, SolveOptions, Solver, StateTable, TableBuilder,
    TableStaging, Turn, SOLVED_KEY,
};
