//! Grammar productions, implemented as `parse_*` methods on [`Parser`](super::Parser).
//!
//! - `expressions`: `expression` and `term`
//! - `atoms`: `primary` and groups

mod atoms;
mod expressions;
