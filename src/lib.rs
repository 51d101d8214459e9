//! # txstore
//! An in-memory key-value store with single-level transactions.
//!
//! ## Features
//! - String keys, integer values
//! - One transaction at a time: `BEGIN`, then `PUT`s, then `COMMIT` or `ROLLBACK`
//! - Reads only ever see committed data
//! - Every misuse is reported as [`InvalidOperation`] and changes nothing
//!
//! ## Usage
//! The binary in `main.rs` offers an interactive REPL and a scripted
//! demo. All reusable logic and unit tests live here so the project can
//! be tested with `cargo test`.
// =====================================================================
// File: lib.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Transactional Store Project
// Date: Oct. 16, 2026
//
//   This module implements the command interpreter used by the REPL,
//   which accepts the following commands:
//
//     `GET <key>`           -> Committed value for key, or NULL
//     `PUT <key> <int>`     -> Buffer a write in the open transaction (alias SET)
//     `BEGIN`               -> Open a transaction (no nesting): OK if valid
//     `COMMIT`              -> Apply buffered writes atomically: OK if valid
//     `ROLLBACK`            -> Discard buffered writes (alias ABORT): OK if valid
//     `EXIT`                -> Terminate the program (alias QUIT)
// =====================================================================
pub mod error;
pub use error::{InvalidOperation, StoreResult};

pub mod transaction;
pub use transaction::Transaction;

pub mod store;
pub use store::{TransactionalStore, TxState};

pub mod shared;
pub use shared::SharedStore;

pub mod demo;
pub use demo::run_demo;

use std::io::{self, BufRead, Write};

/// Usage line printed after an unrecognized command.
pub const PROPER_SYNTAX: &str =
    "Syntax Usage: GET <key>, PUT <key> <int>, BEGIN, COMMIT, ROLLBACK, EXIT";

/// Result of handling a single user command.
///
/// - `Continue` means the REPL should keep running.
/// - `Exit` means the REPL should break out and terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}


/// Read–Evaluate–Print Loop (REPL) over a [`TransactionalStore`].
///
/// Reads commands line by line from `input`, executes them against
/// `store`, and writes responses to `out`. Stops at `EXIT`/`QUIT` or at
/// end of input.
///
/// # Example
/// ```
/// use txstore::{TransactionalStore, repl_loop};
///
/// let mut store = TransactionalStore::new();
/// let script = "BEGIN\nPUT A 6\nCOMMIT\nGET A\nEXIT\n";
/// let mut out = Vec::new();
/// repl_loop(script.as_bytes(), &mut out, &mut store).unwrap();
///
/// assert_eq!(store.get("A"), Some(6));
/// assert!(String::from_utf8(out).unwrap().contains("6\n"));
/// ```
pub fn repl_loop<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    store: &mut TransactionalStore,
) -> io::Result<()> {
    for input_line in input.lines() {
        let full_command = input_line?;
        let (cmd, args) = parse_command(&full_command);

        if handle_command(&cmd, &args, store, out)? == CommandResult::Exit {
            break;
        }
        out.flush()?;
    }
    Ok(())
}


/// Parses a raw input line into a command and its arguments.
///
/// The first token is treated as the command (normalized to uppercase),
/// and the remaining tokens are collected as arguments. Leading and
/// trailing whitespace is ignored.
pub fn parse_command(line: &str) -> (String, Vec<String>) {
    let mut command_segments = line.split_whitespace();
    let cmd = command_segments.next().unwrap_or("").to_uppercase();
    let args: Vec<String> = command_segments.map(|s| s.to_string()).collect();

    (cmd, args)
}


/// Handles a single command and returns whether the REPL should continue or exit.
///
/// Bad arity, a non-integer value or an unknown command prints an
/// `ERR:` line and leaves the store unchanged. Only failures to write
/// to `out` are returned as errors.
pub fn handle_command<W: Write>(
    cmd: &str,
    args: &[String],
    store: &mut TransactionalStore,
    out: &mut W,
) -> io::Result<CommandResult> {
    match cmd {
        // GET <key>
        "GET" => match args {
            [key] => match store.get(key) {
                Some(value) => writeln!(out, "{value}")?,
                None => writeln!(out, "NULL")?,
            },
            [] => writeln!(out, "ERR: GET requires a key")?,
            _ => writeln!(out, "ERR: Too many arguments for GET")?,
        },

        // PUT <key> <int>
        "PUT" | "SET" => match args {
            [key, raw] => match raw.parse::<i64>() {
                Ok(value) => respond(out, store.put(key.as_str(), value))?,
                Err(_) => writeln!(out, "ERR: value must be an integer, got '{raw}'")?,
            },
            _ => writeln!(out, "ERR: {cmd} requires a key and an integer value")?,
        },

        "BEGIN" | "COMMIT" | "ROLLBACK" | "ABORT" if !args.is_empty() => {
            writeln!(out, "ERR: {cmd} does not take any arguments")?;
        }

        "BEGIN" => respond(out, store.begin())?,
        "COMMIT" => respond(out, store.commit())?,
        "ROLLBACK" | "ABORT" => respond(out, store.rollback())?,

        "EXIT" | "QUIT" => {
            writeln!(out, "Exiting...")?;
            return Ok(CommandResult::Exit);
        }

        // Empty input
        "" => writeln!(out, "Enter a command.")?,

        _ => {
            writeln!(out, "ERR: command '{cmd}' not handled")?;
            writeln!(out, "{PROPER_SYNTAX}")?;
        }
    }
    Ok(CommandResult::Continue)
}


fn respond<W: Write>(out: &mut W, result: StoreResult<()>) -> io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "OK"),
        Err(e) => writeln!(out, "ERR: {e}"),
    }
}
