//! # Staffdir CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/staffdir/cli/`, while
//! this file only invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: context wiring, logging setup and per-command handlers
//! - `cli/print.rs`: tables, record views and colored messages
//!
//! Everything the handlers call lives in the `staffdir` library and is UI
//! agnostic.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
