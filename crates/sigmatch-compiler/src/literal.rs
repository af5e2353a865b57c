//! Multi-literal front end.
//!
//! Builds a keyword trie over the literals and exports it in the same table
//! shape as the regular-pattern path. Pattern ids are 1-based positions in the
//! input list; when a literal repeats, the first occurrence keeps the trie node.
//!
//! - [`Anchoring::Anchored`]: trie edges only, plus an [`END_MARKER`] edge out of
//!   every literal end carrying its id. Accepts exactly the literal set.
//! - [`Anchoring::Unanchored`]: Aho-Corasick. A node missing an edge borrows it
//!   from its failure target, and a node with no id of its own reports the id of
//!   the nearest literal ending at its failure chain, so overlapping literals are
//!   still found. Edges back to the root are left out: a miss is a reset.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use sigmatch_table::{AutomatonTable, TableEntry};

use crate::{Anchoring, CompileOptions, END_MARKER, Error, Result};

const MAX_PATTERNS: usize = u8::MAX as usize;
const ROOT: usize = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralSet {
    literals: Vec<Vec<u8>>,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<u8, usize>,
    output: u8,
}

impl LiteralSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_literals<S: AsRef<[u8]>>(literals: &[S]) -> Result<Self> {
        let mut set = Self::new();
        for literal in literals {
            set.push(literal.as_ref())?;
        }
        Ok(set)
    }

    /// Adds a literal and returns its pattern id.
    pub fn push(&mut self, literal: impl Into<Vec<u8>>) -> Result<u8> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(Error::InvalidLiteral {
                index: self.literals.len(),
                reason: "empty literal",
            });
        }
        if self.literals.len() >= MAX_PATTERNS {
            return Err(Error::ResourceExceeded {
                resource: "pattern ids",
                limit: MAX_PATTERNS,
                actual: self.literals.len() + 1,
            });
        }
        self.literals.push(literal);
        Ok(self.literals.len() as u8)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.literals.iter().map(Vec::as_slice)
    }

    pub fn compile(&self, options: &CompileOptions) -> Result<AutomatonTable> {
        let limit = options.get_max_dfa_states();
        match options.get_anchoring() {
            Anchoring::Anchored => {
                self.check_marker_free()?;
                let trie = self.build_trie();
                // One extra state: the sink reached through the end marker.
                check_states(trie.len() + 1, limit)?;
                anchored_table(&trie)
            }
            Anchoring::Unanchored => {
                let trie = self.build_trie();
                check_states(trie.len(), limit)?;
                scan_table(trie)
            }
        }
    }

    fn check_marker_free(&self) -> Result<()> {
        match self.literals.iter().position(|l| l.contains(&END_MARKER)) {
            Some(index) => Err(Error::InvalidLiteral {
                index,
                reason: "contains the end marker `#`",
            }),
            None => Ok(()),
        }
    }

    fn build_trie(&self) -> Vec<TrieNode> {
        let mut nodes = vec![TrieNode::default()];
        for (index, literal) in self.literals.iter().enumerate() {
            let mut cur = ROOT;
            for &byte in literal {
                cur = match nodes[cur].children.get(&byte) {
                    Some(&next) => next,
                    None => {
                        let next = nodes.len();
                        nodes.push(TrieNode::default());
                        nodes[cur].children.insert(byte, next);
                        next
                    }
                };
            }
            if nodes[cur].output == 0 {
                nodes[cur].output = (index + 1) as u8;
            }
        }
        nodes
    }
}

fn check_states(count: usize, limit: usize) -> Result<()> {
    let limit = limit.min(u16::MAX as usize + 1);
    if count > limit {
        return Err(Error::ResourceExceeded {
            resource: "table states",
            limit,
            actual: count,
        });
    }
    Ok(())
}

fn anchored_table(trie: &[TrieNode]) -> Result<AutomatonTable> {
    let sink = trie.len() as u16;
    let mut table = AutomatonTable::new();
    for (state, node) in trie.iter().enumerate() {
        for (&symbol, &next) in &node.children {
            table.insert(TableEntry {
                state: state as u16,
                symbol,
                next_state: next as u16,
                accept: 0,
            })?;
        }
        if node.output != 0 {
            table.insert(TableEntry {
                state: state as u16,
                symbol: END_MARKER,
                next_state: sink,
                accept: node.output,
            })?;
        }
    }
    Ok(table)
}

fn scan_table(mut trie: Vec<TrieNode>) -> Result<AutomatonTable> {
    let alphabet: BTreeSet<u8> = trie
        .iter()
        .flat_map(|n| n.children.keys().copied())
        .collect();

    let mut fail = vec![ROOT; trie.len()];
    let mut delta: Vec<BTreeMap<u8, usize>> = vec![BTreeMap::new(); trie.len()];
    let mut order = Vec::with_capacity(trie.len());
    let mut queue = VecDeque::from([ROOT]);

    // Breadth-first, so a node's failure target is always finished before the node.
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &symbol in &alphabet {
            let next = match trie[node].children.get(&symbol) {
                Some(&child) => Some(child),
                None if node == ROOT => None,
                None => delta[fail[node]].get(&symbol).copied(),
            };
            if let Some(next) = next {
                delta[node].insert(symbol, next);
            }
        }

        let children: Vec<(u8, usize)> = trie[node]
            .children
            .iter()
            .map(|(&s, &c)| (s, c))
            .collect();
        for (symbol, child) in children {
            fail[child] = if node == ROOT {
                ROOT
            } else {
                delta[fail[node]].get(&symbol).copied().unwrap_or(ROOT)
            };
            if trie[child].output == 0 {
                trie[child].output = trie[fail[child]].output;
            }
            queue.push_back(child);
        }
    }

    let mut table = AutomatonTable::new();
    for &state in &order {
        for (&symbol, &next) in &delta[state] {
            table.insert(TableEntry {
                state: state as u16,
                symbol,
                next_state: next as u16,
                accept: trie[next].output,
            })?;
        }
    }
    Ok(table)
}
