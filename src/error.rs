// =====================================================================
// File: error.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Transactional Store Project
// Date: Oct. 16, 2026
//
// Description:
//   Error type for the transactional store. Every failure is a usage
//   error: an operation was called in the wrong transaction state.
//   A failed call never changes the store.
// =====================================================================
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, InvalidOperation>;

/// A store operation was called while its precondition did not hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidOperation {
    /// `put` called with no open transaction.
    #[error("write attempted outside a transaction")]
    WriteOutsideTransaction,

    /// `begin` called while a transaction is already open.
    #[error("transaction already in progress")]
    TransactionInProgress,

    /// `commit` or `rollback` called with no open transaction.
    #[error("no transaction in progress (cannot {op})")]
    NoTransaction {
        /// The operation that was refused.
        op: &'static str,
    },
}

impl InvalidOperation {
    /// Human-readable reason, same text as `Display`.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_violated_precondition() {
        assert_eq!(
            InvalidOperation::WriteOutsideTransaction.to_string(),
            "write attempted outside a transaction"
        );
        assert_eq!(
            InvalidOperation::TransactionInProgress.to_string(),
            "transaction already in progress"
        );
        assert_eq!(
            InvalidOperation::NoTransaction { op: "commit" }.reason(),
            "no transaction in progress (cannot commit)"
        );
        assert_eq!(
            InvalidOperation::NoTransaction { op: "rollback" }.reason(),
            "no transaction in progress (cannot rollback)"
        );
    }
}
