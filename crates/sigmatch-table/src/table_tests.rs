use crate::{AutomatonTable, TableEntry, TableError, Transition};

fn entry(state: u16, symbol: u8, next_state: u16, accept: u8) -> TableEntry {
    TableEntry {
        state,
        symbol,
        next_state,
        accept,
    }
}

fn dog_table() -> AutomatonTable {
    AutomatonTable::try_from(vec![
        entry(0, b'd', 1, 0),
        entry(1, b'o', 2, 0),
        entry(2, b'g', 3, 7),
    ])
    .unwrap()
}

#[test]
fn rejects_duplicate_key() {
    let mut table = AutomatonTable::new();
    table.insert(entry(0, b'a', 1, 0)).unwrap();

    let err = table.insert(entry(0, b'a', 2, 0)).unwrap_err();

    assert_eq!(
        err,
        TableError::DuplicateTransition {
            state: 0,
            symbol: b'a'
        }
    );
    assert_eq!(table.lookup(0, b'a').unwrap().next_state, 1);
}

#[test]
fn iterates_in_key_order() {
    let table = AutomatonTable::try_from(vec![
        entry(2, b'a', 0, 0),
        entry(0, b'z', 1, 0),
        entry(0, b'b', 2, 0),
    ])
    .unwrap();

    let keys: Vec<(u16, u8)> = table.iter().map(|e| (e.state, e.symbol)).collect();
    assert_eq!(keys, vec![(0, b'b'), (0, b'z'), (2, b'a')]);
}

#[test]
fn state_count_covers_targets() {
    assert_eq!(AutomatonTable::new().state_count(), 1);
    assert_eq!(dog_table().state_count(), 4);
}

#[test]
fn walk_is_strict() {
    let table = dog_table();

    assert_eq!(
        table.walk(b"dog"),
        Some(Transition {
            next_state: 3,
            accept: 7
        })
    );
    assert!(!table.walk(b"do").unwrap().is_accepting());
    assert_eq!(table.walk(b"dig"), None);
    assert_eq!(table.walk(b""), None);
}

#[test]
fn json_is_an_entry_array() {
    let table = dog_table();
    let json = serde_json::to_string(&table).unwrap();

    assert!(json.starts_with(r#"[{"state":0,"symbol":100,"next_state":1,"accept":0}"#));

    let back: AutomatonTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}

#[test]
fn json_with_duplicates_is_rejected() {
    let json = r#"[
        {"state":0,"symbol":97,"next_state":1,"accept":0},
        {"state":0,"symbol":97,"next_state":2,"accept":0}
    ]"#;

    let err = serde_json::from_str::<AutomatonTable>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate transition"));
}
