#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Automaton table: the wire contract between the pattern compiler and the
//! payload scanners.
//!
//! A table is a flat set of entries `(state, symbol) -> (next_state, accept)`.
//! State 0 is the start state; `accept` is zero or a positive pattern id.
//! Absent keys mean "reset to the start state" for a scanning consumer.
//!
//! Encodings:
//! - `text` - one entry per line, human editable
//! - `kv` - fixed-size key/value records matching the kernel lookup map
//! - JSON via serde (an array of entries)

mod dump;
mod kv;
mod table;
mod text;

#[cfg(test)]
mod kv_tests;
#[cfg(test)]
mod table_tests;
#[cfg(test)]
mod text_tests;

pub use dump::dump;
pub use kv::{KEY_SIZE, RECORD_SIZE, VALUE_SIZE, array_index, decode, encode, encode_key, encode_value};
pub use table::{AutomatonTable, TableEntry, Transition};
pub use text::{format_symbol, parse_text, to_text};

/// Errors raised while building or decoding a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("duplicate transition for state {state} on symbol {symbol:#04x}")]
    DuplicateTransition { state: u16, symbol: u8 },

    #[error("line {line}: {message}")]
    MalformedLine { line: usize, message: String },

    #[error("key/value buffer of {0} bytes is not a whole number of records")]
    TruncatedRecords(usize),

    #[error("record {0} has nonzero padding")]
    NonZeroPadding(usize),
}
