//! Deterministic automaton, subset construction and minimization.
//!
//! Like the NFA, states live in an arena addressed by [`DfaStateId`]. Each state
//! has at most one transition per symbol; a missing transition is not a reject
//! state, it means "no edge" (a scanning consumer resets on it).

mod minimize;
mod partition;
mod subset;


use std::collections::VecDeque;
use std::fmt;

pub use minimize::minimize;
pub use subset::{DEFAULT_MAX_DFA_STATES, determinize, epsilon_closure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DfaStateId(u32);

impl DfaStateId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DfaStateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfaState {
    transitions: Vec<(u8, DfaStateId)>,
    acceptable: bool,
}

impl DfaState {
    /// Transitions in insertion order.
    pub fn transitions(&self) -> &[(u8, DfaStateId)] {
        &self.transitions
    }

    pub fn is_acceptable(&self) -> bool {
        self.acceptable
    }
}

/// Canonical form of one state: acceptability plus transitions sorted by
/// symbol, targets given as breadth-first positions.
pub type ShapeState = (bool, Vec<(u8, usize)>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: DfaStateId,
}

impl Default for Dfa {
    fn default() -> Self {
        Self::new()
    }
}

impl Dfa {
    /// An automaton with no states. The first state added becomes the start.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            start: DfaStateId(0),
        }
    }

    pub fn add_state(&mut self) -> DfaStateId {
        let id = DfaStateId(self.states.len() as u32);
        self.states.push(DfaState::default());
        id
    }

    pub fn set_start(&mut self, id: DfaStateId) {
        self.start = id;
    }

    pub fn set_acceptable(&mut self, id: DfaStateId, acceptable: bool) {
        self.states[id.index()].acceptable = acceptable;
    }

    /// Adds `from -symbol-> to` unless `from` already has an edge on `symbol`.
    ///
    /// Returns `false` (leaving the existing edge alone) on a duplicate symbol.
    pub fn add_transition(&mut self, from: DfaStateId, symbol: u8, to: DfaStateId) -> bool {
        let state = &mut self.states[from.index()];
        if state.transitions.iter().any(|&(s, _)| s == symbol) {
            return false;
        }
        state.transitions.push((symbol, to));
        true
    }

    pub fn start(&self) -> DfaStateId {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, id: DfaStateId) -> &DfaState {
        &self.states[id.index()]
    }

    pub fn state_ids(&self) -> impl Iterator<Item = DfaStateId> {
        (0..self.states.len() as u32).map(DfaStateId)
    }

    pub fn is_acceptable(&self, id: DfaStateId) -> bool {
        self.states[id.index()].acceptable
    }

    pub fn target(&self, from: DfaStateId, symbol: u8) -> Option<DfaStateId> {
        self.states[from.index()]
            .transitions
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, to)| to)
    }

    /// Follows `input` from the start state. `None` when an edge is missing.
    pub fn walk(&self, input: &[u8]) -> Option<DfaStateId> {
        if self.states.is_empty() {
            return None;
        }
        input
            .iter()
            .try_fold(self.start, |state, &symbol| self.target(state, symbol))
    }

    /// Whole-input acceptance.
    pub fn accepts(&self, input: &[u8]) -> bool {
        self.walk(input).is_some_and(|s| self.is_acceptable(s))
    }

    /// Reachable states in canonical breadth-first order: start first, edges
    /// explored by ascending symbol.
    pub fn canonical_order(&self) -> Vec<DfaStateId> {
        if self.states.is_empty() {
            return Vec::new();
        }

        let mut seen = vec![false; self.states.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([self.start]);
        seen[self.start.index()] = true;

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for (_, to) in self.sorted_transitions(id) {
                if !seen[to.index()] {
                    seen[to.index()] = true;
                    queue.push_back(to);
                }
            }
        }

        order
    }

    pub fn sorted_transitions(&self, id: DfaStateId) -> Vec<(u8, DfaStateId)> {
        let mut transitions = self.states[id.index()].transitions.clone();
        transitions.sort_unstable_by_key(|&(s, _)| s);
        transitions
    }

    /// Renaming-independent description of the reachable automaton.
    ///
    /// Two automata are isomorphic exactly when their shapes are equal.
    pub fn shape(&self) -> Vec<ShapeState> {
        let order = self.canonical_order();
        let mut position = vec![usize::MAX; self.states.len()];
        for (pos, id) in order.iter().enumerate() {
            position[id.index()] = pos;
        }

        order
            .iter()
            .map(|&id| {
                let transitions = self
                    .sorted_transitions(id)
                    .into_iter()
                    .map(|(s, to)| (s, position[to.index()]))
                    .collect();
                (self.is_acceptable(id), transitions)
            })
            .collect()
    }
}
