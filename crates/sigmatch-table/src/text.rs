//! Plain-text table encoding.
//!
//! One entry per line: `<state> <symbol> <next_state> <accept>`. Printable ASCII
//! symbols are written as themselves, everything else (and `\`) as `\xNN`.
//! Blank lines are ignored when parsing.

use std::fmt::Write;

use crate::{AutomatonTable, TableEntry, TableError};

pub fn format_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() && symbol != b'\\' {
        (symbol as char).to_string()
    } else {
        format!("\\x{symbol:02x}")
    }
}

pub fn to_text(table: &AutomatonTable) -> String {
    let mut out = String::new();
    for e in table.iter() {
        writeln!(
            out,
            "{} {} {} {}",
            e.state,
            format_symbol(e.symbol),
            e.next_state,
            e.accept
        )
        .expect("String write never fails");
    }
    out
}

pub fn parse_text(text: &str) -> Result<AutomatonTable, TableError> {
    let mut table = AutomatonTable::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let [state, symbol, next_state, accept] = fields.as_slice() else {
            return Err(malformed(
                line,
                format!("expected 4 fields, found {}", fields.len()),
            ));
        };

        table
            .insert(TableEntry {
                state: parse_number(line, "state", state)?,
                symbol: parse_symbol(line, symbol)?,
                next_state: parse_number(line, "next state", next_state)?,
                accept: parse_number(line, "accept flag", accept)?,
            })
            .map_err(|e| malformed(line, e.to_string()))?;
    }
    Ok(table)
}

fn parse_number<T: std::str::FromStr>(line: usize, what: &str, field: &str) -> Result<T, TableError> {
    field
        .parse()
        .map_err(|_| malformed(line, format!("invalid {what} `{field}`")))
}

fn parse_symbol(line: usize, field: &str) -> Result<u8, TableError> {
    let bytes = field.as_bytes();
    match bytes {
        [b] if *b != b'\\' => Ok(*b),
        [b'\\', b'x', hex @ ..] if hex.len() == 2 => {
            let digits = std::str::from_utf8(hex).unwrap_or_default();
            u8::from_str_radix(digits, 16)
                .map_err(|_| malformed(line, format!("invalid symbol escape `{field}`")))
        }
        _ => Err(malformed(line, format!("invalid symbol `{field}`"))),
    }
}

fn malformed(line: usize, message: String) -> TableError {
    TableError::MalformedLine { line, message }
}
