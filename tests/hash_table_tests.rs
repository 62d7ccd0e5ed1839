//! Tests for the separate-chaining hash table
//!
//! These tests exercise the table through its public API only: insertion,
//! replacement, lookup, removal, and growth across several doublings.

use lzwdict::{bucket_index, HashTable, TableConfig};

/// Test basic set and get
#[test]
fn test_set_and_get() {
    let mut table = HashTable::new();
    table.set("key1".to_string(), 100);
    assert_eq!(table.get("key1"), Some(&100));
}

/// Test presence checks for inserted and missing keys
#[test]
fn test_contains_key() {
    let mut table = HashTable::new();
    table.set("key2".to_string(), 200);
    assert!(table.contains("key2"));
    assert!(!table.contains("key3"));
}

/// Test that removed keys disappear and a second removal reports absence
#[test]
fn test_remove_key() {
    let mut table = HashTable::new();
    table.set("key4".to_string(), 400);

    assert_eq!(table.remove("key4"), Some(400));
    assert!(!table.contains("key4"));
    assert_eq!(table.remove("key4"), None);
    assert!(table.is_empty());
}

/// Test the entry count as keys are added and replaced
#[test]
fn test_size() {
    let mut table = HashTable::new();
    assert_eq!(table.len(), 0);

    table.set("key5".to_string(), 500);
    table.set("key6".to_string(), 600);
    assert_eq!(table.len(), 2);

    table.set("key5".to_string(), 501);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("key5"), Some(&501));
}

/// Test two keys sharing a bucket
#[test]
fn test_handle_collision() {
    let mut table = HashTable::with_capacity(5);
    assert_eq!(bucket_index(&1u32, 5), bucket_index(&6u32, 5));

    table.set(1u32, "Value1");
    table.set(6u32, "Value2");

    assert_eq!(table.get(&1), Some(&"Value1"));
    assert_eq!(table.get(&6), Some(&"Value2"));
    assert_eq!(table.len(), 2);
    assert_eq!(table.stats().longest_chain, 2);
}

/// Test that growth keeps every entry reachable
#[test]
fn test_rehashing() {
    let initial_capacity = 4;
    let mut table = HashTable::with_capacity(initial_capacity);
    for i in 1..=8u32 {
        table.set(i, format!("value{i}"));
    }

    for i in 1..=8u32 {
        assert_eq!(table.get(&i), Some(&format!("value{i}")));
    }
    assert!(table.bucket_count() > initial_capacity);
}

/// Test a capacity-2 table after three inserts
#[test]
fn test_data_integrity_after_resize() {
    let mut table = HashTable::with_capacity(2);
    table.set(1u32, "One");
    table.set(2u32, "Two");
    table.set(3u32, "Three");
    assert!(table.bucket_count() >= 4);

    assert_eq!(table.get(&1), Some(&"One"));
    assert_eq!(table.get(&2), Some(&"Two"));
    assert_eq!(table.get(&3), Some(&"Three"));
    assert_eq!(table.len(), 3);
}

/// Test many doublings with overwrites and removals mixed in
#[test]
fn test_many_resizes() {
    let mut table = HashTable::with_capacity(1);
    for i in 0..10_000u64 {
        table.set(i, i);
    }
    for i in (0..10_000u64).step_by(3) {
        table.set(i, i * 2);
    }
    for i in (0..10_000u64).step_by(5) {
        table.remove(&i);
    }

    for i in 0..10_000u64 {
        let expected = match (i % 5 == 0, i % 3 == 0) {
            (true, _) => None,
            (false, true) => Some(i * 2),
            (false, false) => Some(i),
        };
        assert_eq!(table.get(&i).copied(), expected, "key {i}");
    }
    assert_eq!(table.len(), 8_000);
    assert!(table.len() as f64 / table.bucket_count() as f64 <= table.load_factor());
}

/// Test byte-sequence keys looked up by slice
#[test]
fn test_byte_sequence_keys() {
    let mut table = HashTable::new();
    table.set(b"TO".to_vec(), 256u32);
    table.set(b"OB".to_vec(), 257u32);

    assert_eq!(table.get(b"TO".as_slice()), Some(&256));
    assert_eq!(table.get(&b"OB".to_vec()), Some(&257));
    assert!(!table.contains(b"BE".as_slice()));
}

/// Test custom load factors
#[test]
fn test_configured_load_factor() -> Result<(), Box<dyn std::error::Error>> {
    let mut dense = HashTable::with_config(
        TableConfig::new()
            .with_initial_capacity(4)
            .with_load_factor(3.0),
    )?;
    for i in 0..12u32 {
        dense.set(i, ());
    }
    assert_eq!(dense.bucket_count(), 4);

    dense.set(12u32, ());
    assert_eq!(dense.bucket_count(), 8);

    assert!(HashTable::<u32, ()>::with_config(TableConfig::new().with_load_factor(-0.5)).is_err());
    Ok(())
}

/// Test the snapshot view of all entries
#[test]
fn test_entries() {
    let mut table = HashTable::with_capacity(3);
    for (i, word) in ["alpha", "beta", "gamma", "delta"].iter().enumerate() {
        table.set(word.to_string(), i);
    }
    table.remove("beta");

    let mut entries = table.entries();
    entries.sort_by_key(|(_, i)| *i);
    assert_eq!(
        entries,
        vec![
            ("alpha".to_string(), 0),
            ("gamma".to_string(), 2),
            ("delta".to_string(), 3)
        ]
    );
}
