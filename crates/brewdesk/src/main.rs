//! # Brewdesk CLI
//!
//! A terminal front end for the `brewdeskapp` engine. This file only calls
//! `cli::run()` and turns an error into a message and exit code 1; argument
//! parsing, rendering and the rest live under `src/cli/`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/brewdesk/src/cli/)                             │
//! │  - clap parsing, logging setup, config lookup               │
//! │  - table and dashboard rendering                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (crates/brewdeskapp)                                │
//! │  - DeskApi session, view queries, dashboard                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
