//! Graphviz export of either automaton.
//!
//! Accepting states are drawn as double circles; a point-shaped `start` node
//! points at the start state. DFA states are numbered canonically, matching the
//! exported table.

use std::fmt::Write;

use sigmatch_table::format_symbol;

use crate::dfa::Dfa;
use crate::nfa::{Label, Nfa};

pub fn nfa_to_dot(nfa: &Nfa) -> String {
    let mut out = header("nfa");
    writeln!(out, "  start -> {};", nfa.start()).unwrap();
    for id in nfa.state_ids() {
        if id == nfa.terminate() {
            writeln!(out, "  {id} [shape=doublecircle];").unwrap();
        }
        for t in nfa.transitions(id) {
            let label = match t.label {
                Label::Epsilon => "ε".to_string(),
                Label::Symbol(c) => escape(c),
            };
            writeln!(out, "  {id} -> {} [label=\"{label}\"];", t.target).unwrap();
        }
    }
    out.push_str("}\n");
    out
}

pub fn dfa_to_dot(dfa: &Dfa) -> String {
    let order = dfa.canonical_order();
    let mut number = vec![0usize; dfa.state_count()];
    for (n, id) in order.iter().enumerate() {
        number[id.index()] = n;
    }

    let mut out = header("dfa");
    if !order.is_empty() {
        out.push_str("  start -> 0;\n");
    }
    for &id in &order {
        let n = number[id.index()];
        if dfa.is_acceptable(id) {
            writeln!(out, "  {n} [shape=doublecircle];").unwrap();
        }
        for (symbol, to) in dfa.sorted_transitions(id) {
            writeln!(
                out,
                "  {n} -> {} [label=\"{}\"];",
                number[to.index()],
                escape(symbol)
            )
            .unwrap();
        }
    }
    out.push_str("}\n");
    out
}

fn header(name: &str) -> String {
    format!("digraph {name} {{\n  rankdir=LR;\n  node [shape=circle];\n  start [shape=point];\n")
}

fn escape(symbol: u8) -> String {
    match symbol {
        b'"' => "\\\"".to_string(),
        _ => format_symbol(symbol),
    }
}
