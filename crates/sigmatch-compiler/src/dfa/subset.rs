//! NFA to DFA by subset construction.
//!
//! Each DFA state stands for an epsilon-closed set of NFA states. The memo maps
//! the set, kept sorted and deduplicated, to its DFA state, so no set is ever
//! materialized twice. Exploration is depth-first from the start closure and
//! follows symbols in the order they are first seen in the set. Acceptance is
//! assigned once the graph is complete: a state is acceptable when its set holds
//! the NFA's terminate state.

use indexmap::IndexMap;
use sigmatch_core::GenericList;

use super::{Dfa, DfaStateId};
use crate::nfa::{Label, Nfa, NfaStateId};
use crate::{Error, Result};

/// Table state ids are `u16`.
pub const DEFAULT_MAX_DFA_STATES: usize = u16::MAX as usize + 1;

/// All states reachable from `seeds` through epsilon transitions alone,
/// seeds included. Sorted ascending, without duplicates.
pub fn epsilon_closure(nfa: &Nfa, seeds: impl IntoIterator<Item = NfaStateId>) -> Vec<NfaStateId> {
    let mut closure: GenericList<NfaStateId> = GenericList::new();
    for seed in seeds {
        closure.add(seed);
    }

    // The list grows while we walk it; the walk ends once a pass adds nothing.
    let mut i = 0;
    while i < closure.len() {
        let state = closure[i];
        for t in nfa.transitions(state) {
            if t.label == Label::Epsilon {
                closure.add(t.target);
            }
        }
        i += 1;
    }

    let mut set = closure.into_vec();
    set.sort_unstable();
    set
}

/// Builds the DFA for `nfa`, failing once more than `max_states` would be needed.
pub fn determinize(nfa: &Nfa, max_states: usize) -> Result<Dfa> {
    SubsetBuilder::new(nfa, max_states).run()
}

struct SubsetBuilder<'n> {
    nfa: &'n Nfa,
    dfa: Dfa,
    /// Insertion index equals the DFA state index.
    memo: IndexMap<Vec<NfaStateId>, DfaStateId>,
    max_states: usize,
}

/// Pending work for one DFA state: its outgoing symbols and how many are done.
struct Frame {
    state: DfaStateId,
    symbols: GenericList<u8>,
    next: usize,
}

impl<'n> SubsetBuilder<'n> {
    fn new(nfa: &'n Nfa, max_states: usize) -> Self {
        Self {
            nfa,
            dfa: Dfa::new(),
            memo: IndexMap::new(),
            max_states,
        }
    }

    fn run(mut self) -> Result<Dfa> {
        let initial = epsilon_closure(self.nfa, [self.nfa.start()]);
        let (start, _) = self.register(initial)?;
        self.dfa.set_start(start);

        let mut stack = vec![self.frame(start)];
        while let Some(frame) = stack.last_mut() {
            let Some(&symbol) = frame.symbols.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let source = frame.state;

            let moved = self.step(source, symbol);
            let closure = epsilon_closure(self.nfa, moved);
            let (target, fresh) = self.register(closure)?;
            self.dfa.add_transition(source, symbol, target);

            if fresh {
                stack.push(self.frame(target));
            }
        }

        self.mark_acceptable();
        Ok(self.dfa)
    }

    /// Looks up or creates the DFA state for `set`. The flag is `true` when created.
    fn register(&mut self, set: Vec<NfaStateId>) -> Result<(DfaStateId, bool)> {
        if let Some(&id) = self.memo.get(&set) {
            return Ok((id, false));
        }
        if self.dfa.state_count() >= self.max_states {
            return Err(Error::ResourceExceeded {
                resource: "DFA states",
                limit: self.max_states,
                actual: self.dfa.state_count() + 1,
            });
        }
        let id = self.dfa.add_state();
        self.memo.insert(set, id);
        Ok((id, true))
    }

    fn set_of(&self, id: DfaStateId) -> &[NfaStateId] {
        self.memo
            .get_index(id.index())
            .map(|(set, _)| set.as_slice())
            .unwrap_or_default()
    }

    fn frame(&self, state: DfaStateId) -> Frame {
        let mut symbols = GenericList::new();
        for &nfa_state in self.set_of(state) {
            for t in self.nfa.transitions(nfa_state) {
                if let Label::Symbol(c) = t.label {
                    symbols.add(c);
                }
            }
        }
        Frame {
            state,
            symbols,
            next: 0,
        }
    }

    /// Union of the targets of every `symbol` edge leaving the set of `from`.
    fn step(&self, from: DfaStateId, symbol: u8) -> GenericList<NfaStateId> {
        let mut moved = GenericList::new();
        for &nfa_state in self.set_of(from) {
            for t in self.nfa.transitions(nfa_state) {
                if t.label == Label::Symbol(symbol) {
                    moved.add(t.target);
                }
            }
        }
        moved
    }

    fn mark_acceptable(&mut self) {
        let terminate = self.nfa.terminate();
        for (set, &id) in &self.memo {
            if set.binary_search(&terminate).is_ok() {
                self.dfa.set_acceptable(id, true);
            }
        }
    }
}
