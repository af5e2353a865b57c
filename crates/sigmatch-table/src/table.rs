use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TableError;

/// One exported transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableEntry {
    pub state: u16,
    pub symbol: u8,
    pub next_state: u16,
    pub accept: u8,
}

/// Value side of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub next_state: u16,
    pub accept: u8,
}

impl Transition {
    pub fn is_accepting(&self) -> bool {
        self.accept != 0
    }
}

/// Deterministic transition table keyed by `(state, symbol)`.
///
/// Iteration is ordered by state, then symbol, so every encoding is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TableEntry>", into = "Vec<TableEntry>")]
pub struct AutomatonTable {
    entries: BTreeMap<(u16, u8), Transition>,
}

impl AutomatonTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. A second entry for the same `(state, symbol)` is rejected.
    pub fn insert(&mut self, entry: TableEntry) -> Result<(), TableError> {
        let key = (entry.state, entry.symbol);
        if self.entries.contains_key(&key) {
            return Err(TableError::DuplicateTransition {
                state: entry.state,
                symbol: entry.symbol,
            });
        }
        self.entries.insert(
            key,
            Transition {
                next_state: entry.next_state,
                accept: entry.accept,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, state: u16, symbol: u8) -> Option<Transition> {
        self.entries.get(&(state, symbol)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TableEntry> + '_ {
        self.entries.iter().map(|(&(state, symbol), t)| TableEntry {
            state,
            symbol,
            next_state: t.next_state,
            accept: t.accept,
        })
    }

    /// Number of state ids in use: one past the largest id on either side of
    /// an entry. The start state always counts.
    pub fn state_count(&self) -> usize {
        self.iter()
            .map(|e| e.state.max(e.next_state) as usize + 1)
            .max()
            .unwrap_or(1)
    }

    /// Strict walk from the start state: every byte must have an entry.
    ///
    /// Returns the last transition taken, or `None` on a miss or empty input.
    pub fn walk(&self, input: &[u8]) -> Option<Transition> {
        let mut state = 0;
        let mut last = None;
        for &byte in input {
            let t = self.lookup(state, byte)?;
            state = t.next_state;
            last = Some(t);
        }
        last
    }
}

impl TryFrom<Vec<TableEntry>> for AutomatonTable {
    type Error = TableError;

    fn try_from(entries: Vec<TableEntry>) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }
}

impl From<AutomatonTable> for Vec<TableEntry> {
    fn from(table: AutomatonTable) -> Self {
        table.iter().collect()
    }
}
