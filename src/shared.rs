// =====================================================================
// File: shared.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Transactional Store Project
// Date: Oct. 16, 2026
//
// Description:
//   A cloneable handle that lets several threads use one
//   `TransactionalStore`. The whole store (committed map and
//   transaction state) sits behind a single mutex, held for the
//   duration of each call, so the state and its buffer always change
//   together.
// =====================================================================
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::StoreResult;
use crate::TransactionalStore;

/// Thread-safe handle to a [`TransactionalStore`].
///
/// Clones share the same store. Transactions are not per-handle: a
/// transaction begun through one clone is the store's only open
/// transaction for every clone.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<TransactionalStore>>,
}

impl SharedStore {
    /// Wraps a fresh, empty store.
    pub fn new() -> Self {
        Self::from_store(TransactionalStore::new())
    }

    /// Wraps an existing store.
    pub fn from_store(store: TransactionalStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.inner.lock().get(key)
    }

    pub fn put(&self, key: impl Into<String>, value: i64) -> StoreResult<()> {
        self.inner.lock().put(key, value)
    }

    pub fn begin(&self) -> StoreResult<()> {
        self.inner.lock().begin()
    }

    pub fn commit(&self) -> StoreResult<()> {
        self.inner.lock().commit()
    }

    pub fn rollback(&self) -> StoreResult<()> {
        self.inner.lock().rollback()
    }

    pub fn in_transaction(&self) -> bool {
        self.inner.lock().in_transaction()
    }

    /// Runs `f` with the store locked, for callers that need several
    /// operations to happen without interleaving.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut TransactionalStore) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}
