//! The state table: every reachable cube key mapped to its recovery move.
//!
//! The query-time form is a flat array of entries sorted by key, searched by
//! bisection. It mirrors the on-disk layout record for record, so loading is
//! a single sequential pass with no tree to rebuild.
//!
//! # Module Organization
//!
//! - [`staging`]: hash-map store used while the table is being discovered
//! - [`format`]: reading and writing the 5-byte record file
//!
//! ```text
//! build:  TableStaging (HashMap) ──freeze()──▶ StateTable (sorted Vec)
//! disk:   StateTable ◀──load()── state_table.bin ◀──save()── StateTable
//! ```

pub mod format;
pub mod staging;

use std::path::Path;

use log::info;

use crate::pocket::types::error::{PocketError, Result};
use crate::pocket::types::models::{CubeKey, TABLE_ENTRIES};
use crate::pocket::types::turn::Turn;

pub use staging::TableStaging;

/// One table record: a cube state and the move that brings it one turn
/// closer to solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub key: CubeKey,
    pub recovery: Turn,
}

/// Sorted key → recovery move store.
///
/// Once built or loaded the table is never mutated by the solver and can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateTable {
    entries: Vec<Entry>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps entries that are already sorted.
    ///
    /// # Errors
    /// `InvalidFormat` if the keys are not strictly ascending.
    pub fn from_sorted(entries: Vec<Entry>) -> Result<Self> {
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].key >= pair[1].key) {
            return Err(PocketError::InvalidFormat(format!(
                "Keys out of order: {} followed by {}",
                pair[0].key, pair[1].key
            )));
        }
        Ok(Self { entries })
    }

    /// Looks up the recovery move of `key`.
    ///
    /// Returns `None` for keys not in the table, including the solved key.
    pub fn lookup(&self, key: CubeKey) -> Option<Turn> {
        self.entries
            .binary_search_by_key(&key, |entry| entry.key)
            .ok()
            .map(|index| self.entries[index].recovery)
    }

    pub fn contains(&self, key: CubeKey) -> bool {
        self.lookup(key).is_some()
    }

    /// Inserts `key` unless it is already present.
    ///
    /// The first recorded move is kept: a repeated key is a no-op returning
    /// `false`. Insertion shifts the tail of the array, so bulk construction
    /// goes through [`TableStaging`] instead.
    pub fn insert_if_absent(&mut self, key: CubeKey, recovery: Turn) -> bool {
        match self.entries.binary_search_by_key(&key, |entry| entry.key) {
            Ok(_) => false,
            Err(index) => {
                self.entries.insert(index, Entry { key, recovery });
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries.iter().copied()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns `true` if the table holds exactly one entry per reachable
    /// non-solved state.
    pub fn is_complete(&self) -> bool {
        self.entries.len() == TABLE_ENTRIES
    }

    /// Reads a table file.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - Its length is not a whole number of records
    /// - Keys are out of range or not strictly ascending
    /// - A move code is outside `1..=6`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading state table: {}", path.display());
        let table = format::read_file(path)?;
        info!("State table loaded: {} entries", table.len());
        Ok(table)
    }

    /// Reads a table file and checks it holds `expected` entries.
    pub fn load_expecting(path: impl AsRef<Path>, expected: usize) -> Result<Self> {
        let table = Self::load(path)?;
        if table.len() != expected {
            return Err(PocketError::CountMismatch {
                item_type: "state table entries",
                expected: expected as u64,
                found: table.len() as u64,
            });
        }
        Ok(table)
    }

    /// Reads a table file that must hold every reachable non-solved state.
    ///
    /// A short file (for example one left by an interrupted write) fails with
    /// `CountMismatch` instead of answering `Unreachable` for valid cubes.
    pub fn load_complete(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_expecting(path, TABLE_ENTRIES)
    }

    /// Reads a table from any byte source.
    pub fn read_from(reader: impl std::io::Read) -> Result<Self> {
        format::read_table(reader)
    }

    /// Writes the table file, replacing any existing one only once the new
    /// file is complete.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Writing {} entries to {}", self.len(), path.display());
        format::write_file(path, self)
    }

    /// Writes the table to any byte sink.
    pub fn write_to(&self, writer: impl std::io::Write) -> Result<()> {
        format::write_table(writer, self)
    }
}
