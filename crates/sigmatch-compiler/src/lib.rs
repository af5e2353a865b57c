#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! sigmatch compiler: turns textual signatures into automaton tables.
//!
//! Pipeline for a regular pattern, each stage consuming only the previous one:
//! - `parser` - recursive descent straight into NFA fragments
//! - `dfa::determinize` - epsilon closure plus memoized subset construction
//! - `dfa::minimize` - partition refinement
//! - `emit` - canonical numbering into an [`AutomatonTable`]
//!
//! Literal sets take a separate front end (`literal`) that produces tables in the
//! same shape. `dot` renders either automaton for inspection.

pub mod diagnostics;
pub mod dfa;
pub mod dot;
pub mod emit;
pub mod literal;
pub mod nfa;
pub mod parser;

mod anchor;
mod options;
mod pipeline;
mod trace;

#[cfg(test)]
pub mod test_utils;

pub use anchor::{END_MARKER, accepts_anchored};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use literal::LiteralSet;
pub use options::{Anchoring, CompileOptions};
pub use pipeline::{Compilation, compile_literals, compile_pattern, compile_pattern_traced};
pub use trace::{CompileTracer, NoopTracer, PrintTracer};

pub use sigmatch_core::Verbosity;

pub use sigmatch_table::AutomatonTable;

/// Errors raised while compiling a signature.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Malformed pattern. Carries the span-annotated diagnostic.
    #[error("invalid pattern: {}", .0.summary())]
    Parse(Diagnostics),

    /// Groups nested deeper than the configured recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// A caller-imposed bound was exceeded.
    #[error("{resource} limit exceeded: {actual} > {limit}")]
    ResourceExceeded {
        resource: &'static str,
        limit: usize,
        actual: usize,
    },

    /// An NFA state already carries its two outgoing transitions.
    #[error("NFA state {0} already has two transitions")]
    TransitionLimit(u32),

    /// Pattern ids are reported through a nonzero `u8` accept flag.
    #[error("pattern id must be between 1 and 255")]
    InvalidPatternId,

    #[error("literal {index} is invalid: {reason}")]
    InvalidLiteral { index: usize, reason: &'static str },

    #[error(transparent)]
    Table(#[from] sigmatch_table::TableError),
}

pub type Result<T> = std::result::Result<T, Error>;
