use crate::{
    AutomatonTable, RECORD_SIZE, TableEntry, TableError, array_index, decode, encode, encode_key,
    encode_value,
};

#[test]
fn key_layout() {
    assert_eq!(encode_key(0x0102, b'a'), [0x02, 0x01, b'a', 0]);
}

#[test]
fn value_layout() {
    assert_eq!(encode_value(0x0304, 9), [0, 9, 0x04, 0x03]);
}

#[test]
fn array_index_reads_key_as_u32() {
    assert_eq!(array_index(0, 0), 0);
    assert_eq!(array_index(1, 0), 1);
    assert_eq!(array_index(0, 1), 0x0001_0000);
    assert_eq!(array_index(0x0102, 0xff), 0x00ff_0102);
}

#[test]
fn records_follow_table_order() {
    let table = AutomatonTable::try_from(vec![
        TableEntry {
            state: 1,
            symbol: b'b',
            next_state: 2,
            accept: 1,
        },
        TableEntry {
            state: 0,
            symbol: b'a',
            next_state: 1,
            accept: 0,
        },
    ])
    .unwrap();

    let bytes = encode(&table);

    assert_eq!(bytes.len(), 2 * RECORD_SIZE);
    assert_eq!(&bytes[..8], &[0, 0, b'a', 0, 0, 0, 1, 0]);
    assert_eq!(&bytes[8..], &[1, 0, b'b', 0, 0, 1, 2, 0]);
    assert_eq!(decode(&bytes).unwrap(), table);
}

#[test]
fn decode_rejects_partial_record() {
    assert_eq!(decode(&[0; 12]), Err(TableError::TruncatedRecords(12)));
}

#[test]
fn decode_rejects_padding() {
    let mut bytes = vec![0, 0, b'a', 0, 0, 0, 1, 0];
    bytes[3] = 1;
    assert_eq!(decode(&bytes), Err(TableError::NonZeroPadding(0)));
}
