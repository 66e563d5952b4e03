//! Breadth-first construction of the state table.
//!
//! The traversal starts from the solved cube and expands states in order of
//! distance. A state is recorded the first time it is reached, together with
//! the inverse of the turn that reached it. Since every state at distance `d`
//! is expanded before any state at `d + 1`, that first move always lies on a
//! shortest path back to solved.

use log::{debug, info, warn};

use super::moves;
use super::queue::WorkQueue;
use super::table::{StateTable, TableStaging};
use super::types::error::{PocketError, Result};
use super::types::models::{
    CubeKey, KEY_SPACE, MAX_SOLUTION_LENGTH, REACHABLE_STATES, SOLVED_KEY, TABLE_ENTRIES,
};

/// Tunables for a table build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Number of entries the finished table must hold.
    pub expected_entries: usize,
    /// Capacity of the BFS work queue.
    pub queue_capacity: usize,
    /// Log progress every this many discoveries; 0 disables progress logs.
    pub progress_interval: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            expected_entries: TABLE_ENTRIES,
            queue_capacity: REACHABLE_STATES,
            progress_interval: 250_000,
        }
    }
}

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Entries written to the table (solved excluded).
    pub entries: usize,
    /// Distance of the farthest state from solved.
    pub max_depth: usize,
    /// `depth_histogram[d]` is the number of states at distance `d`, solved included.
    pub depth_histogram: Vec<usize>,
}

/// Runs the breadth-first traversal that fills a [`StateTable`].
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    options: BuildOptions,
}

impl TableBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Traverses the whole state space and returns the frozen table.
    ///
    /// # Errors
    /// `BuildIntegrityFailure` if the move tables are inconsistent, a turn
    /// leaves the key domain, the work queue overflows, or the number of
    /// discovered states differs from `expected_entries`. None of these can
    /// happen with correct move tables; the result must not be used.
    pub fn build(&self) -> Result<(StateTable, BuildReport)> {
        if !moves::transitions_are_permutations() || !moves::inverses_are_consistent() {
            return Err(PocketError::BuildIntegrityFailure(
                "generator transition rows are not invertible permutations".to_string(),
            ));
        }

        info!("Building state table from solved key {}", SOLVED_KEY);
        let mut staging = TableStaging::with_capacity(self.options.expected_entries);
        let mut queue = WorkQueue::with_capacity(self.options.queue_capacity);
        queue.enqueue(SOLVED_KEY)?;

        let mut histogram = vec![1usize];
        let mut remaining_in_level = 1usize;
        let mut next_level = 0usize;

        while let Some(key) = queue.dequeue() {
            for (turn, next) in moves::neighbors(key) {
                check_in_domain(key, next)?;
                // Solved is the root; it never gets an entry.
                if next == SOLVED_KEY {
                    continue;
                }
                if staging.insert_if_absent(next, turn.inverse()) {
                    queue.enqueue(next).map_err(|e| {
                        PocketError::BuildIntegrityFailure(format!("frontier overflow: {}", e))
                    })?;
                    next_level += 1;
                    self.report_progress(staging.len(), histogram.len());
                }
            }

            remaining_in_level -= 1;
            if remaining_in_level == 0 && next_level > 0 {
                debug!("Depth {}: {} states", histogram.len(), next_level);
                histogram.push(next_level);
                remaining_in_level = next_level;
                next_level = 0;
            }
        }

        let entries = staging.len();
        if entries != self.options.expected_entries {
            return Err(PocketError::BuildIntegrityFailure(format!(
                "discovered {} states, expected {}",
                entries, self.options.expected_entries
            )));
        }

        let max_depth = histogram.len() - 1;
        if max_depth > MAX_SOLUTION_LENGTH {
            warn!(
                "Deepest state is {} moves from solved, above the known {}",
                max_depth, MAX_SOLUTION_LENGTH
            );
        }
        info!("State table built: {} entries, max depth {}", entries, max_depth);

        let report = BuildReport {
            entries,
            max_depth,
            depth_histogram: histogram,
        };
        Ok((staging.freeze(), report))
    }

    fn report_progress(&self, discovered: usize, depth: usize) {
        let interval = self.options.progress_interval;
        if interval > 0 && discovered % interval == 0 {
            info!("Discovered {} states (depth {})", discovered, depth);
        }
    }
}

/// Builds the complete table with default options.
pub fn build_table() -> Result<StateTable> {
    TableBuilder::default().build().map(|(table, _)| table)
}

fn check_in_domain(from: CubeKey, next: CubeKey) -> Result<()> {
    if next.raw() >= KEY_SPACE {
        return Err(PocketError::BuildIntegrityFailure(format!(
            "turn from {} produced out-of-domain key {}",
            from, next
        )));
    }
    Ok(())
}
