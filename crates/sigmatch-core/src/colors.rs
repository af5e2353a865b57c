//! ANSI color codes for automaton dumps and scan traces.
//!
//! - Blue: state identifiers
//! - Yellow: input symbols
//! - Green: accept flags and matches
//! - Dim: arrows, separators, resets

/// ANSI color palette for CLI output.
///
/// Only standard 16-color codes, so output reads the same on light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub state: &'static str,
    pub symbol: &'static str,
    pub accept: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        state: "\x1b[34m",
        symbol: "\x1b[33m",
        accept: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        state: "",
        symbol: "",
        accept: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
