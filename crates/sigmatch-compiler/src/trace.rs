//! Compile-stage tracing.
//!
//! `NoopTracer` compiles away entirely. `PrintTracer` collects lines, filtered
//! by [`Verbosity`], for the CLI to print on stderr.

use sigmatch_core::{Colors, Verbosity};
use sigmatch_table::{AutomatonTable, format_symbol};

use crate::dfa::Dfa;
use crate::nfa::{Label, Nfa};

pub trait CompileTracer {
    /// Called once the NFA is closed.
    fn trace_nfa(&mut self, nfa: &Nfa);

    /// Called after subset construction.
    fn trace_dfa(&mut self, dfa: &Dfa);

    /// Called after minimization with both automata.
    fn trace_minimized(&mut self, before: &Dfa, after: &Dfa);

    /// Called when a table has been emitted.
    fn trace_table(&mut self, table: &AutomatonTable);
}

pub struct NoopTracer;

impl CompileTracer for NoopTracer {
    #[inline(always)]
    fn trace_nfa(&mut self, _nfa: &Nfa) {}

    #[inline(always)]
    fn trace_dfa(&mut self, _dfa: &Dfa) {}

    #[inline(always)]
    fn trace_minimized(&mut self, _before: &Dfa, _after: &Dfa) {}

    #[inline(always)]
    fn trace_table(&mut self, _table: &AutomatonTable) {}
}

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

    fn stage(&mut self, name: &str, detail: String) {
        let c = self.colors;
        self.lines
            .push(format!("{}{name:<9}{} {detail}", c.dim, c.reset));
    }

    /// One line per state, numbered as in the emitted table.
    fn dfa_states(&mut self, dfa: &Dfa) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        for (n, (acceptable, transitions)) in dfa.shape().into_iter().enumerate() {
            let mut line = format!("  {}{n}{}", c.state, c.reset);
            if acceptable {
                line.push_str(&format!(" {}accept{}", c.accept, c.reset));
            }
            for (symbol, to) in transitions {
                line.push_str(&format!(
                    " {}{}{}{}->{}{}",
                    c.symbol,
                    format_symbol(symbol),
                    c.reset,
                    c.dim,
                    c.reset,
                    to
                ));
            }
            self.lines.push(line);
        }
    }
}

impl CompileTracer for PrintTracer {
    fn trace_nfa(&mut self, nfa: &Nfa) {
        self.stage("nfa", format!("{} states", nfa.state_count()));
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        for id in nfa.state_ids() {
            for t in nfa.transitions(id) {
                let label = match t.label {
                    Label::Epsilon => "ε".to_string(),
                    Label::Symbol(c) => format_symbol(c),
                };
                self.lines.push(format!("  {id} -{label}-> {}", t.target));
            }
        }
    }

    fn trace_dfa(&mut self, dfa: &Dfa) {
        self.stage("dfa", format!("{} states", dfa.state_count()));
        self.dfa_states(dfa);
    }

    fn trace_minimized(&mut self, before: &Dfa, after: &Dfa) {
        self.stage(
            "minimize",
            format!("{} -> {} states", before.state_count(), after.state_count()),
        );
        self.dfa_states(after);
    }

    fn trace_table(&mut self, table: &AutomatonTable) {
        self.stage(
            "table",
            format!("{} entries, {} states", table.len(), table.state_count()),
        );
    }
}
