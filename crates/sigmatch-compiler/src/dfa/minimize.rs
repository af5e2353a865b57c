//! DFA minimization by partition refinement.
//!
//! Reachable states start in at most two blocks (acceptable and not). A block is
//! split when some member's edge on a symbol lands in a different block than the
//! first member's edge; a missing edge on both sides counts as agreement. After
//! every split the pass starts over, until a full pass splits nothing. Each
//! surviving block then becomes one state of the result.

use sigmatch_core::GenericList;

use super::partition::Partition;
use super::{Dfa, DfaStateId};

pub fn minimize(dfa: &Dfa) -> Dfa {
    if dfa.state_count() == 0 {
        return Dfa::new();
    }

    let reachable = dfa.canonical_order();
    let (acceptable, rejecting): (Vec<DfaStateId>, Vec<DfaStateId>) =
        reachable.iter().partition(|&&s| dfa.is_acceptable(s));

    let mut partition = Partition::new(dfa.state_count());
    for members in [acceptable, rejecting] {
        if !members.is_empty() {
            partition.push(members);
        }
    }

    while refine_once(dfa, &mut partition) {}

    merge(dfa, &partition)
}

/// Performs the first split found. Returns `false` at the fixpoint.
fn refine_once(dfa: &Dfa, partition: &mut Partition) -> bool {
    for block in partition.ids() {
        for &symbol in &block_symbols(dfa, partition.members(block)) {
            let members = partition.members(block);
            let reference = partition.target_block(dfa, members[0], symbol);
            let (stay, moved): (Vec<DfaStateId>, Vec<DfaStateId>) = members
                .iter()
                .partition(|&&s| partition.target_block(dfa, s, symbol) == reference);

            if !moved.is_empty() {
                partition.split(block, stay, moved);
                return true;
            }
        }
    }
    false
}

fn block_symbols(dfa: &Dfa, members: &[DfaStateId]) -> GenericList<u8> {
    let mut symbols = GenericList::new();
    for &state in members {
        for &(symbol, _) in dfa.state(state).transitions() {
            symbols.add(symbol);
        }
    }
    symbols
}

fn merge(dfa: &Dfa, partition: &Partition) -> Dfa {
    let blocks = partition.ids();
    let mut merged: Vec<DfaStateId> = vec![DfaStateId(0); partition.len()];
    let mut out = Dfa::new();

    for &block in &blocks {
        let id = out.add_state();
        let acceptable = dfa.is_acceptable(partition.members(block)[0]);
        out.set_acceptable(id, acceptable);
        merged[block] = id;
    }

    for &block in &blocks {
        for &state in partition.members(block) {
            for &(symbol, target) in dfa.state(state).transitions() {
                let Some(target_block) = partition.block_of(target) else {
                    continue;
                };
                out.add_transition(merged[block], symbol, merged[target_block]);
            }
        }
    }

    if let Some(start_block) = partition.block_of(dfa.start()) {
        out.set_start(merged[start_block]);
    }
    out
}
