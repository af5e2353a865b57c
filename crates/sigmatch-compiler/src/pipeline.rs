//! End-to-end compile: pattern text to NFA, DFA and (optionally) minimal DFA.

use sigmatch_table::AutomatonTable;

use crate::dfa::{Dfa, determinize, minimize};
use crate::emit::emit_table;
use crate::literal::LiteralSet;
use crate::nfa::{Nfa, NfaBuilder};
use crate::parser::parse_pattern;
use crate::trace::{CompileTracer, NoopTracer};
use crate::{Anchoring, CompileOptions, END_MARKER, Result};

/// Every stage of one compiled pattern.
#[derive(Debug, Clone)]
pub struct Compilation {
    nfa: Nfa,
    dfa: Dfa,
    minimized: Option<Dfa>,
    anchoring: Anchoring,
    pattern_id: u8,
}

impl Compilation {
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// The subset-construction output, before minimization.
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn minimized(&self) -> Option<&Dfa> {
        self.minimized.as_ref()
    }

    /// The final automaton: minimized when minimization was requested.
    pub fn automaton(&self) -> &Dfa {
        self.minimized.as_ref().unwrap_or(&self.dfa)
    }

    pub fn anchoring(&self) -> Anchoring {
        self.anchoring
    }

    /// Whole-input acceptance on the final automaton, honouring the end marker.
    pub fn accepts(&self, input: &[u8]) -> bool {
        let dfa = self.automaton();
        match self.anchoring {
            Anchoring::Anchored => dfa
                .walk(input)
                .and_then(|s| dfa.target(s, END_MARKER))
                .is_some_and(|s| dfa.is_acceptable(s)),
            Anchoring::Unanchored => dfa.accepts(input),
        }
    }

    pub fn table(&self) -> Result<AutomatonTable> {
        emit_table(self.automaton(), self.pattern_id)
    }
}

pub fn compile_pattern(source: &str, options: &CompileOptions) -> Result<Compilation> {
    compile_pattern_traced(source, options, &mut NoopTracer)
}

pub fn compile_pattern_traced<T: CompileTracer>(
    source: &str,
    options: &CompileOptions,
    tracer: &mut T,
) -> Result<Compilation> {
    let mut builder = NfaBuilder::new().with_max_states(options.get_max_nfa_states());
    let mut fragment = parse_pattern(source, &mut builder, options.get_recursion_limit())?;
    if options.get_anchoring() == Anchoring::Anchored {
        let marker = builder.atomic(END_MARKER)?;
        fragment = builder.concat(fragment, marker)?;
    }
    let nfa = builder.finish(fragment);
    tracer.trace_nfa(&nfa);

    let dfa = determinize(&nfa, options.get_max_dfa_states())?;
    tracer.trace_dfa(&dfa);

    let minimized = if options.get_minimize() {
        let min = minimize(&dfa);
        tracer.trace_minimized(&dfa, &min);
        Some(min)
    } else {
        None
    };

    Ok(Compilation {
        nfa,
        dfa,
        minimized,
        anchoring: options.get_anchoring(),
        pattern_id: options.get_pattern_id(),
    })
}

/// Compiles a literal set straight to a table. Pattern ids follow input order.
pub fn compile_literals<S: AsRef<[u8]>>(
    literals: &[S],
    options: &CompileOptions,
) -> Result<AutomatonTable> {
    LiteralSet::from_literals(literals)?.compile(options)
}
