// ============================================================
// File: main.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Transactional Store Project
// Date: Oct. 16, 2026
//
// Description:
//   Entry point for the transactional key-value store program.
//
//     txstore [--verbose] [repl]   -> interactive command loop
//     txstore [--verbose] demo     -> scripted demonstration
//
//   The REPL reads from standard input and writes responses to
//   standard output, which allows automated black-box testing.
//   Logs go to standard error.
// ============================================================
use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use txstore::{TransactionalStore, repl_loop, run_demo};

/// In-memory key-value store with single-level transactions.
#[derive(Parser)]
#[command(name = "txstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from standard input (default)
    Repl,

    /// Run the scripted demonstration
    Demo,
}


fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            writeln!(out, "Transactional Key Value Store")?;
            out.flush()?;
            let mut store = TransactionalStore::new();
            repl_loop(io::stdin().lock(), &mut out, &mut store)?;
        }
        Commands::Demo => run_demo(&mut out)?,
    }

    Ok(())
}
