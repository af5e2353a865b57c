//! Human-readable table dump, grouped by source state.

use std::fmt::Write;

use sigmatch_core::Colors;

use crate::AutomatonTable;
use crate::text::format_symbol;

/// Renders the table as one block per state:
///
/// ```text
/// 0:
///   d -> 1
/// 3:
///   g -> 4  accept 1
/// ```
pub fn dump(table: &AutomatonTable, colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();
    let mut current = None;

    for e in table.iter() {
        if current != Some(e.state) {
            current = Some(e.state);
            writeln!(out, "{}{}{}{}:{}", c.state, e.state, c.reset, c.dim, c.reset)
                .expect("String write never fails");
        }
        write!(
            out,
            "  {}{}{} {}->{} {}{}{}",
            c.symbol,
            format_symbol(e.symbol),
            c.reset,
            c.dim,
            c.reset,
            c.state,
            e.next_state,
            c.reset
        )
        .expect("String write never fails");
        if e.accept != 0 {
            write!(out, "  {}accept {}{}", c.accept, e.accept, c.reset)
                .expect("String write never fails");
        }
        out.push('\n');
    }
    out
}
