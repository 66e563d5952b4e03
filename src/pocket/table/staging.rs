//! Insertion-optimized store used while the table is discovered.

use std::collections::HashMap;

use log::debug;

use super::{Entry, StateTable};
use crate::pocket::types::models::CubeKey;
use crate::pocket::types::turn::Turn;

/// Hash-map backed staging area with the same first-wins contract as
/// [`StateTable::insert_if_absent`], in O(1) amortized time.
#[derive(Debug, Default)]
pub struct TableStaging {
    entries: HashMap<CubeKey, Turn>,
}

impl TableStaging {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Records `key` unless already present. Returns `true` if it was new.
    pub fn insert_if_absent(&mut self, key: CubeKey, recovery: Turn) -> bool {
        match self.entries.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(recovery);
                true
            }
        }
    }

    pub fn lookup(&self, key: CubeKey) -> Option<Turn> {
        self.entries.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts the staged entries into the query-time table.
    pub fn freeze(self) -> StateTable {
        let mut entries: Vec<Entry> = self
            .entries
            .into_iter()
            .map(|(key, recovery)| Entry { key, recovery })
            .collect();
        entries.sort_unstable_by_key(|entry| entry.key);
        debug!("Froze {} staged entries into sorted table", entries.len());
        StateTable { entries }
    }
}
