//! # Storage Layer
//!
//! Staffdir keeps its whole state in a small key-value substrate, the same way a
//! browser app would use local storage: one key per document, string values.
//!
//! ## Split Responsibilities
//!
//! - [`backend::StorageBackend`]: the "how" of storage. Reads and writes raw
//!   strings under keys. Knows nothing about employees.
//! - [`employee_store::EmployeeStore`]: the "what". Owns the employee list,
//!   serializes it wholesale on every mutation and notifies subscribers.
//!
//! ## Keys
//!
//! | Key | Content |
//! |-----|---------|
//! | `employees` | JSON array of every employee record |
//! | `app-language` | Active UI language code (`en`, `tr`) |
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key inside the data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.local/share/staffdir/
//! ├── employees        # Employee list (JSON array)
//! ├── app-language     # Language code
//! └── config.json      # Directory configuration
//! ```

pub mod backend;
pub mod employee_store;
pub mod events;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::{StorageBackend, EMPLOYEES_KEY, LANGUAGE_KEY};
pub use employee_store::EmployeeStore;
pub use events::SubscriptionId;
