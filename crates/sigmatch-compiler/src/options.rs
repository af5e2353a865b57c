use crate::dfa::DEFAULT_MAX_DFA_STATES;
use crate::nfa::DEFAULT_MAX_NFA_STATES;
use crate::parser::DEFAULT_RECURSION_LIMIT;

/// Where a compiled automaton expects its input to end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchoring {
    /// Whole-input matching. The pattern is followed by [`END_MARKER`](crate::END_MARKER);
    /// a string matches when walking it and then the marker lands on an accept.
    Anchored,
    /// Byte-at-a-time scanning with reset-on-miss, as run by the payload scanner.
    #[default]
    Unanchored,
}

/// Options for one compile.
#[derive(Clone, Debug)]
pub struct CompileOptions {
    anchoring: Anchoring,
    minimize: bool,
    pattern_id: u8,
    recursion_limit: u32,
    max_nfa_states: usize,
    max_dfa_states: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            anchoring: Anchoring::default(),
            minimize: true,
            pattern_id: 1,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            max_nfa_states: DEFAULT_MAX_NFA_STATES,
            max_dfa_states: DEFAULT_MAX_DFA_STATES,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchoring(mut self, anchoring: Anchoring) -> Self {
        self.anchoring = anchoring;
        self
    }

    pub fn minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }

    /// Accept flag written for a regular pattern's table.
    pub fn pattern_id(mut self, id: u8) -> Self {
        self.pattern_id = id;
        self
    }

    /// Maximum group nesting depth (default: 256).
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn max_nfa_states(mut self, max: usize) -> Self {
        self.max_nfa_states = max;
        self
    }

    /// Upper bound on DFA and table states (default: 65536, the `u16` id space).
    pub fn max_dfa_states(mut self, max: usize) -> Self {
        self.max_dfa_states = max.min(DEFAULT_MAX_DFA_STATES);
        self
    }

    pub fn get_anchoring(&self) -> Anchoring {
        self.anchoring
    }
    pub fn get_minimize(&self) -> bool {
        self.minimize
    }
    pub fn get_pattern_id(&self) -> u8 {
        self.pattern_id
    }
    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
    pub fn get_max_nfa_states(&self) -> usize {
        self.max_nfa_states
    }
    pub fn get_max_dfa_states(&self) -> usize {
        self.max_dfa_states
    }
}
