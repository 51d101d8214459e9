// =====================================================================
// File: transaction/transaction.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Transactional Store Project
// Date: Oct. 16, 2026
//
// Description:
//   Implements the Transaction struct, which represents the single
//   in-progress transaction. It keeps the pending writes (key–value
//   pairs) that have not yet been applied to the committed map.
//
//   Used by TransactionalStore to provide atomic BEGIN / COMMIT /
//   ROLLBACK behavior.
//
// =====================================================================
use std::collections::HashMap;

/// Pending write buffer of an open transaction.
/// Only the last value written per key is kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Uncommitted key-value pairs.
    pending: HashMap<String, i64>,
}


impl Transaction {
    /// Creates a new, empty transaction buffer.
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Records a pending write, replacing any earlier value for the key.
    ///
    /// # Example
    /// ```
    /// use txstore::Transaction;
    /// let mut tx = Transaction::new();
    /// tx.set("A", 5);
    /// tx.set("A", 6);
    /// assert_eq!(tx.pending_count(), 1);
    /// assert_eq!(tx.get("A"), Some(6));
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: i64) {
        self.pending.insert(key.into(), value);
    }

    /// Value currently buffered for `key`, if any.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.pending.get(key).copied()
    }

    /// Applies every pending write to `committed` and consumes the buffer.
    ///
    /// Each key is written once, so the order across keys does not
    /// matter. Returns the number of keys applied.
    pub fn apply(self, committed: &mut HashMap<String, i64>) -> usize {
        let applied = self.pending.len();
        committed.extend(self.pending);
        applied
    }

    /// Returns the number of distinct keys in the buffer.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if the transaction currently has no changes.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Keys written in this transaction, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pending.keys().map(String::as_str)
    }
}
