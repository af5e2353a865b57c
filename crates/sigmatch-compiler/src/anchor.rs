use sigmatch_table::AutomatonTable;

/// Symbol appended to anchored patterns. Outside the pattern alphabet.
pub const END_MARKER: u8 = b'#';

/// Whole-input acceptance for a table compiled with [`Anchoring::Anchored`](crate::Anchoring).
///
/// Walks `input` strictly from state 0, then the end marker. Returns the
/// pattern id on acceptance.
pub fn accepts_anchored(table: &AutomatonTable, input: &[u8]) -> Option<u8> {
    let mut state = 0;
    for &byte in input {
        state = table.lookup(state, byte)?.next_state;
    }
    let last = table.lookup(state, END_MARKER)?;
    last.is_accepting().then_some(last.accept)
}
