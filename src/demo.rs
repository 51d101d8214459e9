// =====================================================================
// File: demo.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Transactional Store Project
// Date: Oct. 16, 2026
//
// Description:
//   Demonstration driver. Walks a fresh store through the standard
//   sequence of reads, writes, commits and rollbacks, printing what
//   each step returns next to what was expected.
// =====================================================================
use std::fmt::Debug;
use std::io::{self, Write};

use crate::error::StoreResult;
use crate::TransactionalStore;

const RULE: &str = "============================================================";

/// Runs the demonstration against a new store, writing to `out`.
///
/// A step that misbehaves prints an `ERROR:` line and the run goes on.
pub fn run_demo<W: Write>(out: &mut W) -> io::Result<()> {
    let mut store = TransactionalStore::new();

    writeln!(out, "{RULE}")?;
    writeln!(out, "In-Memory Database with Transaction Support - Demo")?;
    writeln!(out, "{RULE}")?;

    section(out, "Test 1: Get non-existent key")?;
    show_get(out, &store, "A", "None (A doesn't exist yet)")?;

    section(out, "Test 2: Put without transaction")?;
    expect_failure(out, store.put("A", 5))?;

    section(out, "Test 3: Transaction with commit")?;
    report(out, store.begin(), "Started new transaction")?;
    report(out, store.put("A", 5), "Set A = 5 (not committed yet)")?;
    show_get(out, &store, "A", "None (changes not committed yet)")?;
    report(out, store.put("A", 6), "Updated A = 6 (still not committed)")?;
    report(out, store.commit(), "Committed transaction")?;
    show_get(out, &store, "A", "6 (last committed value)")?;

    section(out, "Test 4: Commit without transaction")?;
    expect_failure(out, store.commit())?;

    section(out, "Test 5: Rollback without transaction")?;
    expect_failure(out, store.rollback())?;

    section(out, "Test 6: Get another non-existent key")?;
    show_get(out, &store, "B", "None (B doesn't exist)")?;

    section(out, "Test 7: Transaction with rollback")?;
    report(out, store.begin(), "Started new transaction")?;
    report(out, store.put("B", 10), "Set B = 10 (not committed)")?;
    report(out, store.rollback(), "Rolled back transaction")?;
    show_get(out, &store, "B", "None (changes were rolled back)")?;

    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "All steps completed.")?;
    writeln!(out, "{RULE}")?;
    Ok(())
}


fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {title} ---")
}

fn show_get<W: Write>(
    out: &mut W,
    store: &TransactionalStore,
    key: &str,
    expected: &str,
) -> io::Result<()> {
    writeln!(out, "get('{key}') = {:?}", store.get(key))?;
    writeln!(out, "Expected: {expected}")
}

fn report<W: Write>(out: &mut W, result: StoreResult<()>, done: &str) -> io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "{done}"),
        Err(e) => writeln!(out, "ERROR: unexpected failure: {e}"),
    }
}

fn expect_failure<W: Write, T: Debug>(out: &mut W, result: StoreResult<T>) -> io::Result<()> {
    match result {
        Ok(value) => writeln!(out, "ERROR: should have failed, got {value:?}"),
        Err(e) => writeln!(out, "Caught expected error: {e}"),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn demo_output() -> String {
        let mut buf = Vec::new();
        run_demo(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_demo_reports_no_errors() {
        let output = demo_output();
        assert!(!output.contains("ERROR:"), "unexpected output:\n{output}");
    }

    #[test]
    fn test_demo_shows_committed_value() {
        let output = demo_output();
        assert!(output.contains("get('A') = Some(6)"));
        assert!(output.contains("get('B') = None"));
    }

    #[test]
    fn test_demo_catches_every_invalid_call() {
        let output = demo_output();
        assert!(output.contains("Caught expected error: write attempted outside a transaction"));
        assert!(output.contains("Caught expected error: no transaction in progress (cannot commit)"));
        assert!(output.contains("Caught expected error: no transaction in progress (cannot rollback)"));
        assert_eq!(output.matches("Caught expected error").count(), 3);
    }
}
