use indoc::indoc;

use crate::{AutomatonTable, TableEntry, TableError, format_symbol, parse_text, to_text};

#[test]
fn symbols_escape_unprintable_bytes() {
    assert_eq!(format_symbol(b'a'), "a");
    assert_eq!(format_symbol(b'#'), "#");
    assert_eq!(format_symbol(b' '), "\\x20");
    assert_eq!(format_symbol(b'\\'), "\\x5c");
    assert_eq!(format_symbol(0xff), "\\xff");
}

#[test]
fn prints_one_entry_per_line() {
    let mut table = AutomatonTable::new();
    table
        .insert(TableEntry {
            state: 1,
            symbol: b'\n',
            next_state: 2,
            accept: 3,
        })
        .unwrap();
    table
        .insert(TableEntry {
            state: 0,
            symbol: b'a',
            next_state: 1,
            accept: 0,
        })
        .unwrap();

    insta::assert_snapshot!(to_text(&table), @r"
    0 a 1 0
    1 \x0a 2 3
    ");
}

#[test]
fn parses_printed_form() {
    let text = indoc! {r"
        0 a 1 0

        1 \x0a 2 3
    "};

    let table = parse_text(text).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup(1, b'\n').unwrap().accept, 3);
    assert_eq!(to_text(&table), "0 a 1 0\n1 \\x0a 2 3\n");
}

#[test]
fn reports_line_of_bad_field() {
    let err = parse_text("0 a 1 0\n0 b x 0\n").unwrap_err();
    assert_eq!(
        err,
        TableError::MalformedLine {
            line: 2,
            message: "invalid next state `x`".to_string()
        }
    );
}

#[test]
fn reports_wrong_field_count() {
    let err = parse_text("0 a 1\n").unwrap_err();
    assert_eq!(err.to_string(), "line 1: expected 4 fields, found 3");
}

#[test]
fn reports_duplicate_with_line() {
    let err = parse_text("0 a 1 0\n0 a 2 0\n").unwrap_err();
    assert!(matches!(err, TableError::MalformedLine { line: 2, .. }));
}

#[test]
fn rejects_multibyte_symbol() {
    assert!(parse_text("0 ab 1 0").is_err());
    assert!(parse_text("0 \\xZZ 1 0").is_err());
}
