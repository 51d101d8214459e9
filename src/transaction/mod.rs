// =====================================================================
// File: transaction/mod.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Transactional Store Project
// Date: Oct. 16, 2026
//
// Description:
//   Module entry point for the transaction buffer. Re-exports the
//   `Transaction` struct, which holds uncommitted key–value writes
//   until the owning store commits or rolls them back.
//
// =====================================================================
pub mod transaction;

pub use self::transaction::Transaction;

#[cfg(test)]
mod tests;
