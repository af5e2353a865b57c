//! Scan tracing.
//!
//! `NoopTracer` methods are empty and `#[inline(always)]`, so an untraced scan
//! carries no tracing cost. `PrintTracer` collects one line per event.

use sigmatch_core::{Colors, Verbosity};
use sigmatch_table::format_symbol;

pub trait Tracer {
    /// Called after a hit moves the scanner from `from` to `to`.
    fn trace_step(&mut self, pos: usize, byte: u8, from: u16, to: u16);

    /// Called when `(state, byte)` has no entry and the scanner resets to 0.
    fn trace_reset(&mut self, pos: usize, byte: u8, state: u16);

    /// Called when a hit carries a pattern id. The scan stops here.
    fn trace_accept(&mut self, pos: usize, pattern_id: u8);

    /// Called when the depth limit cut the payload short.
    fn trace_depth_exhausted(&mut self, depth: usize);
}

pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_step(&mut self, _pos: usize, _byte: u8, _from: u16, _to: u16) {}

    #[inline(always)]
    fn trace_reset(&mut self, _pos: usize, _byte: u8, _state: u16) {}

    #[inline(always)]
    fn trace_accept(&mut self, _pos: usize, _pattern_id: u8) {}

    #[inline(always)]
    fn trace_depth_exhausted(&mut self, _depth: usize) {}
}

/// Collects trace lines for display.
///
/// - `Default`: accepts and the depth cutoff
/// - `Verbose`: also resets from a nonzero state
/// - `VeryVerbose`: every byte
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn prefix(&self, pos: usize, byte: u8) -> String {
        let c = self.colors;
        format!("{pos:>5} {}{:<4}{}", c.symbol, format_symbol(byte), c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_step(&mut self, pos: usize, byte: u8, from: u16, to: u16) {
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let line = format!(
            "{} {}{from}{} {}->{} {}{to}{}",
            self.prefix(pos, byte),
            c.state,
            c.reset,
            c.dim,
            c.reset,
            c.state,
            c.reset
        );
        self.lines.push(line);
    }

    fn trace_reset(&mut self, pos: usize, byte: u8, state: u16) {
        let shown = match self.verbosity {
            Verbosity::Default => false,
            Verbosity::Verbose => state != 0,
            Verbosity::VeryVerbose => true,
        };
        if !shown {
            return;
        }
        let c = self.colors;
        let line = format!(
            "{} {}{state}{} {}reset{}",
            self.prefix(pos, byte),
            c.state,
            c.reset,
            c.dim,
            c.reset
        );
        self.lines.push(line);
    }

    fn trace_accept(&mut self, pos: usize, pattern_id: u8) {
        let c = self.colors;
        self.lines
            .push(format!("{pos:>5} {}match pattern {pattern_id}{}", c.accept, c.reset));
    }

    fn trace_depth_exhausted(&mut self, depth: usize) {
        let c = self.colors;
        self.lines
            .push(format!("{depth:>5} {}depth limit reached{}", c.dim, c.reset));
    }
}
