#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core building blocks for the sigmatch signature compiler.
//!
//! - [`GenericList`]: growable ordered sequence that doubles as an insertion-ordered set
//! - [`Colors`]: ANSI palette used by table dumps and trace output
//! - [`Verbosity`]: detail level shared by the compile and scan tracers

mod colors;
mod list;
mod verbosity;


pub use colors::Colors;
pub use list::{GenericList, INITIAL_CAPACITY};
pub use verbosity::Verbosity;
