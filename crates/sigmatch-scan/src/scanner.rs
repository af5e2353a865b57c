//! Byte-at-a-time scanning with reset on miss.

use crate::dense::DenseTable;
use crate::trace::{NoopTracer, Tracer};

/// Bounds on one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanLimits {
    /// Bytes inspected before giving up (default: the whole payload).
    pub(crate) depth: Option<usize>,
}

impl ScanLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect at most `depth` bytes of each payload.
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn get_depth(&self) -> Option<usize> {
        self.depth
    }
}

/// First accepting transition taken during a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanMatch {
    pub pattern_id: u8,
    /// Offset of the byte that completed the match.
    pub end: usize,
    /// State reached by that byte.
    pub state: u16,
}

pub struct Scanner<'t> {
    table: &'t DenseTable,
    limits: ScanLimits,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t DenseTable) -> Self {
        Self {
            table,
            limits: ScanLimits::default(),
        }
    }

    pub fn limits(mut self, limits: ScanLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Scans `payload` and reports the first match.
    ///
    /// Uses `NoopTracer`, which compiles away.
    pub fn scan(&self, payload: &[u8]) -> Option<ScanMatch> {
        self.scan_with_tracer(payload, &mut NoopTracer)
    }

    pub fn scan_with_tracer<T: Tracer>(&self, payload: &[u8], tracer: &mut T) -> Option<ScanMatch> {
        let depth = self
            .limits
            .depth
            .map_or(payload.len(), |d| d.min(payload.len()));
        let mut state = 0u16;

        for (pos, &byte) in payload[..depth].iter().enumerate() {
            match self.table.lookup(state, byte) {
                Some(t) => {
                    tracer.trace_step(pos, byte, state, t.next_state);
                    state = t.next_state;
                    if t.is_accepting() {
                        tracer.trace_accept(pos, t.accept);
                        return Some(ScanMatch {
                            pattern_id: t.accept,
                            end: pos,
                            state,
                        });
                    }
                }
                None => {
                    tracer.trace_reset(pos, byte, state);
                    state = 0;
                }
            }
        }

        if depth < payload.len() {
            tracer.trace_depth_exhausted(depth);
        }
        None
    }

    /// Strict walk over the whole input: any miss rejects.
    ///
    /// Returns the accept flag of the last step when it is nonzero.
    pub fn accepts_exact(&self, input: &[u8]) -> Option<u8> {
        let mut state = 0u16;
        let mut accept = 0;
        for &byte in input {
            let t = self.table.lookup(state, byte)?;
            state = t.next_state;
            accept = t.accept;
        }
        (accept != 0).then_some(accept)
    }
}
