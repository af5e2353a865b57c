//! Thompson-style NFA over bytes.
//!
//! States live in a flat arena addressed by [`NfaStateId`]. Closures create
//! back-edges, so nothing here owns another state; the arena is dropped as a whole.
//! Each state carries at most two outgoing transitions, kept in insertion order.

mod builder;
mod matcher;

#[cfg(test)]
mod nfa_tests;

use std::collections::VecDeque;
use std::fmt;

pub use builder::{DEFAULT_MAX_NFA_STATES, Fragment, NfaBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NfaStateId(u32);

impl NfaStateId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NfaStateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Epsilon,
    Symbol(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NfaTransition {
    pub label: Label,
    pub target: NfaStateId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NfaState {
    slots: [Option<NfaTransition>; 2],
}

impl NfaState {
    pub fn transition_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Outgoing transitions in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = NfaTransition> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Stores `transition` in the first free slot. `false` when both are taken.
    fn push(&mut self, transition: NfaTransition) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(transition);
                true
            }
            None => false,
        }
    }
}

/// A finished automaton with a single start and a single terminate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: NfaStateId,
    terminate: NfaStateId,
}

impl Nfa {
    pub fn start(&self) -> NfaStateId {
        self.start
    }

    pub fn terminate(&self) -> NfaStateId {
        self.terminate
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, id: NfaStateId) -> &NfaState {
        &self.states[id.index()]
    }

    pub fn transitions(&self, id: NfaStateId) -> impl Iterator<Item = NfaTransition> + '_ {
        self.state(id).transitions()
    }

    pub fn state_ids(&self) -> impl Iterator<Item = NfaStateId> {
        (0..self.states.len() as u32).map(NfaStateId)
    }

    /// States reachable from the start, in breadth-first transition order.
    pub fn reachable_states(&self) -> Vec<NfaStateId> {
        reachable_from(&self.states, self.start)
    }
}

fn reachable_from(states: &[NfaState], start: NfaStateId) -> Vec<NfaStateId> {
    let mut seen = vec![false; states.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    seen[start.index()] = true;

    while let Some(id) = queue.pop_front() {
        order.push(id);
        for t in states[id.index()].transitions() {
            if !seen[t.target.index()] {
                seen[t.target.index()] = true;
                queue.push_back(t.target);
            }
        }
    }

    order
}
