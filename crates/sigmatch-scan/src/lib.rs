#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Reference consumer for sigmatch automaton tables.
//!
//! Scans a payload one byte at a time from state 0. A hit moves to the next
//! state and stops the scan when the entry carries a pattern id; a miss resets
//! to state 0 without re-reading the byte. This is the lookup loop a packet
//! filter runs against the key/value map.

mod dense;
mod scanner;
mod trace;


pub use dense::DenseTable;
pub use scanner::{ScanLimits, ScanMatch, Scanner};
pub use trace::{NoopTracer, PrintTracer, Tracer};

pub use sigmatch_core::Verbosity;
