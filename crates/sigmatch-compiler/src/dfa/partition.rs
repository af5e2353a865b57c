//! Equivalence blocks for partition refinement.
//!
//! Blocks sit in an arena and are threaded into a circular doubly-linked list,
//! so a split splices the new block in right after its parent in O(1).

use super::{Dfa, DfaStateId};

pub(super) type BlockId = usize;

struct Block {
    members: Vec<DfaStateId>,
    prev: BlockId,
    next: BlockId,
}

pub(super) struct Partition {
    blocks: Vec<Block>,
    head: Option<BlockId>,
    block_of: Vec<Option<BlockId>>,
}

impl Partition {
    pub(super) fn new(state_count: usize) -> Self {
        Self {
            blocks: Vec::new(),
            head: None,
            block_of: vec![None; state_count],
        }
    }

    /// Appends a block at the end of the list.
    pub(super) fn push(&mut self, members: Vec<DfaStateId>) -> BlockId {
        let id = self.blocks.len();
        let (prev, next) = match self.head {
            None => (id, id),
            Some(head) => (self.blocks[head].prev, head),
        };
        self.link(id, prev, next, members);
        if self.head.is_none() {
            self.head = Some(id);
        }
        id
    }

    /// Keeps `stay` in `block` and moves `moved` into a new block spliced in after it.
    pub(super) fn split(
        &mut self,
        block: BlockId,
        stay: Vec<DfaStateId>,
        moved: Vec<DfaStateId>,
    ) -> BlockId {
        self.blocks[block].members = stay;
        let id = self.blocks.len();
        let next = self.blocks[block].next;
        self.link(id, block, next, moved);
        id
    }

    fn link(&mut self, id: BlockId, prev: BlockId, next: BlockId, members: Vec<DfaStateId>) {
        for &state in &members {
            self.block_of[state.index()] = Some(id);
        }
        self.blocks.push(Block {
            members,
            prev,
            next,
        });
        self.blocks[prev].next = id;
        self.blocks[next].prev = id;
    }

    /// Block ids in list order, starting at the head.
    pub(super) fn ids(&self) -> Vec<BlockId> {
        let Some(head) = self.head else {
            return Vec::new();
        };
        let mut ids = vec![head];
        let mut cur = self.blocks[head].next;
        while cur != head {
            ids.push(cur);
            cur = self.blocks[cur].next;
        }
        ids
    }

    pub(super) fn len(&self) -> usize {
        self.blocks.len()
    }

    pub(super) fn members(&self, block: BlockId) -> &[DfaStateId] {
        &self.blocks[block].members
    }

    pub(super) fn block_of(&self, state: DfaStateId) -> Option<BlockId> {
        self.block_of[state.index()]
    }

    /// Block holding the target of `state` on `symbol`, `None` when there is no edge.
    pub(super) fn target_block(&self, dfa: &Dfa, state: DfaStateId, symbol: u8) -> Option<BlockId> {
        dfa.target(state, symbol).and_then(|t| self.block_of(t))
    }
}
