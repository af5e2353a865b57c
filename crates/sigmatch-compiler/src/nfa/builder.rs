//! Fragment construction.
//!
//! | Operator      | New states      | Wiring (all epsilon unless noted)                    |
//! |---------------|-----------------|------------------------------------------------------|
//! | `atomic(c)`   | start, terminate | start -c-> terminate                                 |
//! | `concat`      | none            | A.terminate -> B.start                               |
//! | `alternate`   | start, terminate | start -> A.start, start -> B.start, A/B.terminate -> terminate |
//! | `optional`    | start           | start -> A.start, start -> A.terminate               |
//! | `kleene`      | start, terminate | A.terminate -> start, start -> A.start, start -> terminate |
//! | `positive`    | start, terminate | start -> A.start, A.terminate -> start, A.terminate -> terminate |
//!
//! Operators only add edges at an operand's boundary states. A fragment's
//! terminate state never has outgoing edges until an operator consumes it.

use super::{Label, Nfa, NfaState, NfaStateId, NfaTransition, reachable_from};
use crate::{Error, Result};

/// Default cap on allocated NFA states.
pub const DEFAULT_MAX_NFA_STATES: usize = 1 << 20;

/// Boundary pair of a partially built automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: NfaStateId,
    pub terminate: NfaStateId,
}

#[derive(Debug, Clone)]
pub struct NfaBuilder {
    states: Vec<NfaState>,
    max_states: usize,
}

impl Default for NfaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            max_states: DEFAULT_MAX_NFA_STATES,
        }
    }

    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Allocates an isolated state.
    pub fn add_state(&mut self) -> Result<NfaStateId> {
        if self.states.len() >= self.max_states {
            return Err(Error::ResourceExceeded {
                resource: "NFA states",
                limit: self.max_states,
                actual: self.states.len() + 1,
            });
        }
        let id = NfaStateId(self.states.len() as u32);
        self.states.push(NfaState::default());
        Ok(id)
    }

    pub fn transition_count(&self, id: NfaStateId) -> usize {
        self.states[id.index()].transition_count()
    }

    pub fn transitions(&self, id: NfaStateId) -> impl Iterator<Item = NfaTransition> + '_ {
        self.states[id.index()].transitions()
    }

    pub fn add_transition(&mut self, from: NfaStateId, label: Label, to: NfaStateId) -> Result<()> {
        let transition = NfaTransition { label, target: to };
        if !self.states[from.index()].push(transition) {
            return Err(Error::TransitionLimit(from.raw()));
        }
        Ok(())
    }

    pub fn add_epsilon(&mut self, from: NfaStateId, to: NfaStateId) -> Result<()> {
        self.add_transition(from, Label::Epsilon, to)
    }

    pub fn atomic(&mut self, symbol: u8) -> Result<Fragment> {
        let start = self.add_state()?;
        let terminate = self.add_state()?;
        self.add_transition(start, Label::Symbol(symbol), terminate)?;
        Ok(Fragment { start, terminate })
    }

    pub fn concat(&mut self, a: Fragment, b: Fragment) -> Result<Fragment> {
        self.add_epsilon(a.terminate, b.start)?;
        Ok(Fragment {
            start: a.start,
            terminate: b.terminate,
        })
    }

    pub fn alternate(&mut self, a: Fragment, b: Fragment) -> Result<Fragment> {
        let start = self.add_state()?;
        let terminate = self.add_state()?;
        self.add_epsilon(start, a.start)?;
        self.add_epsilon(start, b.start)?;
        self.add_epsilon(a.terminate, terminate)?;
        self.add_epsilon(b.terminate, terminate)?;
        Ok(Fragment { start, terminate })
    }

    pub fn optional(&mut self, a: Fragment) -> Result<Fragment> {
        let start = self.add_state()?;
        self.add_epsilon(start, a.start)?;
        self.add_epsilon(start, a.terminate)?;
        Ok(Fragment {
            start,
            terminate: a.terminate,
        })
    }

    pub fn kleene(&mut self, a: Fragment) -> Result<Fragment> {
        let start = self.add_state()?;
        let terminate = self.add_state()?;
        self.add_epsilon(a.terminate, start)?;
        self.add_epsilon(start, a.start)?;
        self.add_epsilon(start, terminate)?;
        Ok(Fragment { start, terminate })
    }

    pub fn positive(&mut self, a: Fragment) -> Result<Fragment> {
        let start = self.add_state()?;
        let terminate = self.add_state()?;
        self.add_epsilon(start, a.start)?;
        self.add_epsilon(a.terminate, start)?;
        self.add_epsilon(a.terminate, terminate)?;
        Ok(Fragment { start, terminate })
    }

    /// Closes the arena around `fragment`.
    ///
    /// States unreachable from the fragment's start are collected here, and the
    /// survivors are renumbered in breadth-first order (start = 0).
    pub fn finish(self, fragment: Fragment) -> Nfa {
        let mut order = reachable_from(&self.states, fragment.start);
        let terminate = match order.iter().position(|&s| s == fragment.terminate) {
            Some(pos) => pos,
            None => {
                order.push(fragment.terminate);
                order.len() - 1
            }
        };

        let mut renumber = vec![None; self.states.len()];
        for (new, old) in order.iter().enumerate() {
            renumber[old.index()] = Some(NfaStateId(new as u32));
        }

        let states = order
            .iter()
            .map(|old| {
                let mut state = NfaState::default();
                for t in self.states[old.index()].transitions() {
                    if let Some(target) = renumber[t.target.index()] {
                        state.push(NfaTransition {
                            label: t.label,
                            target,
                        });
                    }
                }
                state
            })
            .collect();

        Nfa {
            states,
            start: NfaStateId(0),
            terminate: NfaStateId(terminate as u32),
        }
    }
}
