// =====================================================================
// File: transaction/tests.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Transactional Store Project
// Date: Oct. 16, 2026
//
// Description:
//   Unit tests for the transaction buffer, covering creation,
//   last-write-wins buffering, and applying the buffer to a
//   committed map.
//
// =====================================================================
use std::collections::HashMap;

use super::transaction::Transaction;

// -------------------------------------------------------------
// Basic construction and initial state
// -------------------------------------------------------------
#[test]
fn test_new_transaction_is_empty() {
    let tx = Transaction::new();
    assert_eq!(tx.pending_count(), 0);
    assert!(tx.is_empty());
    assert_eq!(tx.keys().count(), 0);
}

// -------------------------------------------------------------
// Adding writes to the transaction
// -------------------------------------------------------------
#[test]
fn test_set_adds_pending_write() {
    let mut tx = Transaction::new();
    tx.set("key1", 1);

    assert_eq!(tx.pending_count(), 1);
    assert_eq!(tx.get("key1"), Some(1));
    assert!(!tx.is_empty());
}

#[test]
fn test_multiple_sets_accumulate() {
    let mut tx = Transaction::new();
    tx.set("k1", 1);
    tx.set("k2", 2);
    tx.set("k3", 3);

    assert_eq!(tx.pending_count(), 3);
    let mut keys: Vec<&str> = tx.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["k1", "k2", "k3"]);
}

#[test]
fn test_set_same_key_keeps_last_value() {
    let mut tx = Transaction::new();
    tx.set("A", 5);
    tx.set("A", 6);

    assert_eq!(tx.pending_count(), 1, "Only one entry per key");
    assert_eq!(tx.get("A"), Some(6));
}

#[test]
fn test_get_missing_key_is_none() {
    let tx = Transaction::new();
    assert_eq!(tx.get("ghost"), None);
}

// -------------------------------------------------------------
// Apply behavior
// -------------------------------------------------------------
#[test]
fn test_apply_inserts_all_pending_writes() {
    let mut tx = Transaction::new();
    tx.set("dog", 1);
    tx.set("cat", 2);

    let mut committed = HashMap::new();
    let applied = tx.apply(&mut committed);

    assert_eq!(applied, 2);
    assert_eq!(committed.get("dog"), Some(&1));
    assert_eq!(committed.get("cat"), Some(&2));
}

#[test]
fn test_apply_overwrites_existing_keys() {
    let mut committed = HashMap::new();
    committed.insert("color".to_string(), 1);
    committed.insert("keep".to_string(), 7);

    let mut tx = Transaction::new();
    tx.set("color", 2);
    tx.apply(&mut committed);

    assert_eq!(committed.get("color"), Some(&2));
    assert_eq!(committed.get("keep"), Some(&7), "Untouched keys survive");
}

#[test]
fn test_apply_empty_buffer_changes_nothing() {
    let mut committed = HashMap::new();
    committed.insert("keep".to_string(), 1);

    let applied = Transaction::new().apply(&mut committed);

    assert_eq!(applied, 0);
    assert_eq!(committed.len(), 1);
}
