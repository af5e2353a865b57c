//! DFA to automaton table.
//!
//! States are numbered in canonical breadth-first order, so the start state is 0
//! and equal automata always produce byte-identical tables. An entry carries the
//! pattern id when its target state is acceptable.

use sigmatch_table::{AutomatonTable, TableEntry};

use crate::dfa::Dfa;
use crate::{Error, Result};

/// Table state ids are `u16`.
const MAX_TABLE_STATES: usize = u16::MAX as usize + 1;

pub fn emit_table(dfa: &Dfa, pattern_id: u8) -> Result<AutomatonTable> {
    if pattern_id == 0 {
        return Err(Error::InvalidPatternId);
    }

    let order = dfa.canonical_order();
    if order.len() > MAX_TABLE_STATES {
        return Err(Error::ResourceExceeded {
            resource: "table states",
            limit: MAX_TABLE_STATES,
            actual: order.len(),
        });
    }

    let mut number = vec![0u16; dfa.state_count()];
    for (n, id) in order.iter().enumerate() {
        number[id.index()] = n as u16;
    }

    let mut table = AutomatonTable::new();
    for &id in &order {
        for (symbol, target) in dfa.sorted_transitions(id) {
            table.insert(TableEntry {
                state: number[id.index()],
                symbol,
                next_state: number[target.index()],
                accept: if dfa.is_acceptable(target) { pattern_id } else { 0 },
            })?;
        }
    }
    Ok(table)
}
