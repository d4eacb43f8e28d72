//! # Staffdir Architecture
//!
//! Staffdir is a **UI-agnostic employee directory library**. The terminal client in
//! `cli/` is one consumer of it; nothing below the API layer knows a terminal exists.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (id prefixes → UUIDs)                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation before mutation, reference-list checks        │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - EmployeeStore: owns the list, persists, notifies         │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation ([`validation`]) and list presentation ([`listing`]) are pure
//! functions over snapshots; any layer may call them.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Diagnostics go through `tracing`; the binary decides whether and where they
//! are shown.
//!
//! ## Testing Strategy
//!
//! 1. **Store, validation, listing**: unit tests against `MemBackend` and fixed
//!    clocks.
//! 2. **Commands** (`commands/*.rs`): the bulk of behavioural tests.
//! 3. **API** (`api.rs`): dispatch and id resolution.
//! 4. **CLI**: argument parsing and rendering helpers in `cli/`, plus end-to-end
//!    runs of the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Record store, change notification and storage backends
//! - [`model`]: Core data types (`Employee`, `EmployeeData`, `Field`)
//! - [`validation`]: Field rules and the full-record validator
//! - [`listing`]: Sorting, paging and selection
//! - [`i18n`]: English and Turkish strings, date display
//! - [`config`]: Directory configuration
//! - [`seed`]: Sample data generator
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod init;
pub mod listing;
pub mod model;
pub mod seed;
pub mod store;
pub mod validation;
