//! Flat lookup array over a table.

use sigmatch_table::{AutomatonTable, Transition};

const ALPHABET: usize = 256;

/// `state_count * 256` cells, one per `(state, byte)`. Empty cells are misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseTable {
    cells: Vec<Option<Transition>>,
    state_count: usize,
}

impl DenseTable {
    pub fn from_table(table: &AutomatonTable) -> Self {
        let state_count = table.state_count();
        let mut cells = vec![None; state_count * ALPHABET];
        for e in table.iter() {
            cells[e.state as usize * ALPHABET + e.symbol as usize] = Some(Transition {
                next_state: e.next_state,
                accept: e.accept,
            });
        }
        Self { cells, state_count }
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    #[inline]
    pub fn lookup(&self, state: u16, byte: u8) -> Option<Transition> {
        self.cells
            .get(state as usize * ALPHABET + byte as usize)
            .copied()
            .flatten()
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&AutomatonTable> for DenseTable {
    fn from(table: &AutomatonTable) -> Self {
        Self::from_table(table)
    }
}
