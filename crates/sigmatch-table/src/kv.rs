//! Fixed-size key/value records for the kernel lookup map.
//!
//! ```text
//! key   = state: u16 LE | unit: u8 | padding: u8
//! value = padding: u8   | flag: u8 | state: u16 LE
//! ```
//!
//! A record is a key followed by its value. A flat array map indexes entries by
//! the key bytes read as a little-endian `u32` (see [`array_index`]).

use crate::{AutomatonTable, TableEntry, TableError};

pub const KEY_SIZE: usize = 4;
pub const VALUE_SIZE: usize = 4;
pub const RECORD_SIZE: usize = KEY_SIZE + VALUE_SIZE;

pub fn encode_key(state: u16, symbol: u8) -> [u8; KEY_SIZE] {
    let [lo, hi] = state.to_le_bytes();
    [lo, hi, symbol, 0]
}

pub fn encode_value(next_state: u16, accept: u8) -> [u8; VALUE_SIZE] {
    let [lo, hi] = next_state.to_le_bytes();
    [0, accept, lo, hi]
}

pub fn array_index(state: u16, symbol: u8) -> u32 {
    u32::from_le_bytes(encode_key(state, symbol))
}

pub fn encode(table: &AutomatonTable) -> Vec<u8> {
    let mut out = Vec::with_capacity(table.len() * RECORD_SIZE);
    for e in table.iter() {
        out.extend_from_slice(&encode_key(e.state, e.symbol));
        out.extend_from_slice(&encode_value(e.next_state, e.accept));
    }
    out
}

pub fn decode(bytes: &[u8]) -> Result<AutomatonTable, TableError> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(TableError::TruncatedRecords(bytes.len()));
    }

    let mut table = AutomatonTable::new();
    for (index, record) in bytes.chunks_exact(RECORD_SIZE).enumerate() {
        let &[s0, s1, symbol, key_pad, value_pad, accept, n0, n1] = record else {
            unreachable!("chunks_exact yields RECORD_SIZE slices");
        };
        if key_pad != 0 || value_pad != 0 {
            return Err(TableError::NonZeroPadding(index));
        }
        table.insert(TableEntry {
            state: u16::from_le_bytes([s0, s1]),
            symbol,
            next_state: u16::from_le_bytes([n0, n1]),
            accept,
        })?;
    }
    Ok(table)
}
