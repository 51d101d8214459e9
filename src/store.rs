// =====================================================================
// File: store.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Transactional Store Project
// Date: Oct. 16, 2026
//
// Description:
// Defines `TransactionalStore`, the in-memory key-value store with a
// single-level transaction model.
//
// Responsibilities:
// - Own the committed key-value map that every `get` reads from.
// - Track whether a transaction is open, together with its pending
//   write buffer, as one tagged state (`Idle` / `Open`).
// - Reject calls made in the wrong state with `InvalidOperation`,
//   leaving the store unchanged.
//
// Each store is an independent value; there is no global instance.
// =====================================================================
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{InvalidOperation, StoreResult};
use crate::Transaction;

/// Transaction state of a store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum TxState {
    /// No transaction is open.
    #[default]
    Idle,
    /// A transaction is open with its pending writes.
    Open(Transaction),
}


/// In-memory key-value store with at most one open transaction.
///
/// Reads always see committed data. Writes are only accepted inside a
/// transaction and become visible when it commits.
///
/// # Example
/// ```
/// use txstore::TransactionalStore;
///
/// let mut store = TransactionalStore::new();
/// store.begin().unwrap();
/// store.put("A", 5).unwrap();
/// assert_eq!(store.get("A"), None);
/// store.commit().unwrap();
/// assert_eq!(store.get("A"), Some(5));
/// ```
#[derive(Debug, Default, Clone)]
pub struct TransactionalStore {
    committed: HashMap<String, i64>,
    state: TxState,
}


impl TransactionalStore {
    /// Creates an empty store with no open transaction.
    pub fn new() -> Self {
        Self {
            committed: HashMap::new(),
            state: TxState::Idle,
        }
    }

    /// Returns the committed value for `key`.
    ///
    /// Pending writes of an open transaction are never visible here.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.committed.get(key).copied()
    }

    /// Buffers `key -> value` in the open transaction.
    ///
    /// Fails with [`InvalidOperation::WriteOutsideTransaction`] when no
    /// transaction is open.
    pub fn put(&mut self, key: impl Into<String>, value: i64) -> StoreResult<()> {
        match &mut self.state {
            TxState::Open(tx) => {
                tx.set(key, value);
                Ok(())
            }
            TxState::Idle => {
                let err = InvalidOperation::WriteOutsideTransaction;
                warn!(error = %err, "put rejected");
                Err(err)
            }
        }
    }

    /// Opens a new transaction with an empty buffer.
    ///
    /// Fails with [`InvalidOperation::TransactionInProgress`] if one is
    /// already open; the open transaction keeps its writes.
    pub fn begin(&mut self) -> StoreResult<()> {
        if self.in_transaction() {
            let err = InvalidOperation::TransactionInProgress;
            warn!(error = %err, "begin rejected");
            return Err(err);
        }

        self.state = TxState::Open(Transaction::new());
        debug!("transaction started");
        Ok(())
    }

    /// Applies every pending write to the committed map and closes the
    /// transaction.
    pub fn commit(&mut self) -> StoreResult<()> {
        let tx = self.take_open("commit")?;
        let applied = tx.apply(&mut self.committed);
        debug!(applied, committed_keys = self.committed.len(), "transaction committed");
        Ok(())
    }

    /// Discards every pending write and closes the transaction.
    pub fn rollback(&mut self) -> StoreResult<()> {
        let tx = self.take_open("rollback")?;
        debug!(discarded = tx.pending_count(), "transaction rolled back");
        Ok(())
    }

    /// Returns `true` if a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        matches!(self.state, TxState::Open(_))
    }

    /// Number of keys buffered in the open transaction (0 when idle).
    pub fn pending_count(&self) -> usize {
        match &self.state {
            TxState::Open(tx) => tx.pending_count(),
            TxState::Idle => 0,
        }
    }

    /// Number of committed keys.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns `true` if nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Current transaction state.
    pub fn state(&self) -> &TxState {
        &self.state
    }

    // Leaves the state untouched on error.
    fn take_open(&mut self, op: &'static str) -> StoreResult<Transaction> {
        match std::mem::take(&mut self.state) {
            TxState::Open(tx) => Ok(tx),
            TxState::Idle => {
                let err = InvalidOperation::NoTransaction { op };
                warn!(error = %err, "{op} rejected");
                Err(err)
            }
        }
    }
}


// =====================================================================
// Unit Tests for TransactionalStore
// =====================================================================
