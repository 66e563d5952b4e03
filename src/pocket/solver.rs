//! Table-driven solving.
//!
//! Solving is a walk down the BFS tree: look up the recovery move of the
//! current state, apply it, repeat until the solved key comes up. The solved
//! key has no table entry, so it is checked before every lookup.

use std::sync::Arc;

use log::{debug, info, trace};

use super::codec::facelets::Facelets;
use super::moves;
use super::table::StateTable;
use super::types::error::{PocketError, Result};
use super::types::models::{CubeKey, MAX_SOLUTION_LENGTH, TABLE_ENTRIES};
use super::types::turn::Turn;

/// Tunables for solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Moves to follow before declaring the table corrupt. Never below 14.
    pub max_moves: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_moves: MAX_SOLUTION_LENGTH,
        }
    }
}

/// Solves `key` using `table`.
///
/// Returns the turns to apply, in order. The solved key yields an empty
/// sequence without touching the table.
///
/// # Errors
/// - `Unreachable` if a state on the path has no entry (for the input key
///   this means the cube cannot be reached from solved)
/// - `SolveBoundExceeded` if the path is longer than the bound
pub fn solve(key: CubeKey, table: &StateTable) -> Result<Vec<Turn>> {
    solve_with(key, table, SolveOptions::default())
}

/// [`solve`] with explicit options.
pub fn solve_with(key: CubeKey, table: &StateTable, options: SolveOptions) -> Result<Vec<Turn>> {
    let bound = options.max_moves.max(MAX_SOLUTION_LENGTH);
    let mut current = key;
    let mut turns = Vec::new();

    while !current.is_solved() {
        if turns.len() >= bound {
            return Err(PocketError::SolveBoundExceeded { key, bound });
        }
        let turn = table.lookup(current).ok_or(PocketError::Unreachable(current))?;
        trace!("{} -> {}", current, turn);
        current = moves::apply(current, turn);
        turns.push(turn);
    }

    debug!("Solved {} in {} moves", key, turns.len());
    Ok(turns)
}

/// A solver holding a shared, read-only table.
///
/// Cloning is cheap; clones share the same table.
#[derive(Debug, Clone)]
pub struct Solver {
    table: Arc<StateTable>,
    options: SolveOptions,
}

impl Solver {
    pub fn new(table: Arc<StateTable>) -> Self {
        Self::with_options(table, SolveOptions::default())
    }

    pub fn with_options(table: Arc<StateTable>, options: SolveOptions) -> Self {
        Self { table, options }
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    pub fn solve(&self, key: CubeKey) -> Result<Vec<Turn>> {
        solve_with(key, &self.table, self.options)
    }

    /// Encodes and solves a sticker layout.
    pub fn solve_facelets(&self, facelets: &Facelets) -> Result<Vec<Turn>> {
        self.solve(facelets.to_key()?)
    }
}

/// Solves every entry of `table` and returns the longest solution length.
///
/// # Errors
/// - `CountMismatch` if the table does not hold every reachable state
/// - the first entry that fails to solve within the bound
pub fn verify_table(table: &StateTable) -> Result<usize> {
    if !table.is_complete() {
        return Err(PocketError::CountMismatch {
            item_type: "state table entries",
            expected: TABLE_ENTRIES as u64,
            found: table.len() as u64,
        });
    }
    info!("Verifying {} table entries", table.len());
    let mut longest = 0;
    for entry in table.iter() {
        let turns = solve(entry.key, table)?;
        longest = longest.max(turns.len());
    }
    info!("Every entry solves; longest solution is {} moves", longest);
    Ok(longest)
}
