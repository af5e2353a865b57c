//! Direct whole-input matching against an NFA.
//!
//! Used as the reference semantics for the later stages. Runs the automaton
//! as a set of live states: one epsilon closure per input position, so stack
//! use is constant in the input length.

use super::{Label, Nfa, NfaStateId};
use crate::dfa::epsilon_closure;

impl Nfa {
    /// Whether the automaton accepts exactly `input`.
    pub fn is_match(&self, input: &[u8]) -> bool {
        let mut current = epsilon_closure(self, [self.start()]);
        for &byte in input {
            if current.is_empty() {
                return false;
            }
            current = epsilon_closure(self, self.step(&current, byte));
        }
        current.binary_search(&self.terminate()).is_ok()
    }

    /// Targets of every `symbol` edge leaving `states`.
    fn step(&self, states: &[NfaStateId], symbol: u8) -> Vec<NfaStateId> {
        states
            .iter()
            .flat_map(|&s| self.transitions(s))
            .filter(|t| t.label == Label::Symbol(symbol))
            .map(|t| t.target)
            .collect()
    }
}
