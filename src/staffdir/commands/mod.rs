//! # Command Layer
//!
//! This module contains the **core business logic** of staffdir. Each command lives in
//! its own submodule and implements pure Rust functions over the record store.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate candidates before any mutation reaches the store
//! - Operate on `Employee`, `EmployeeData` and `EmployeePatch`
//! - Return structured `CmdResult` values with affected records and messages
//! - Stay completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr, colors or prompts
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Failure Reporting
//!
//! - An invalid candidate is a `StaffError::Validation` carrying the full report.
//! - Ids that match nothing are reported as warning messages, never as errors, so
//!   a bulk delete keeps going past a stale id.
//!
//! ## Command Modules
//!
//! - [`add`]: Validate and add a record
//! - [`update`]: Validate a merged record and update it
//! - [`delete`]: Delete one or many records
//! - [`list`]: Sorted, paged listing
//! - [`show`]: A single record
//! - [`clear`]: Remove every record
//! - [`seed`]: Generate sample records
//! - [`language`]: Read or persist the UI language
//! - [`config`]: Read or change directory settings
//! - [`helpers`]: Id resolution and reference-list checks

use crate::config::DirectoryConfig;
use crate::i18n::Language;
use crate::listing::PageLink;
use crate::model::Employee;
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod language;
pub mod list;
pub mod seed;
pub mod show;
pub mod update;

#[derive(Debug, Clone)]
pub struct StaffPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One rendered page of the employee list.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub rows: Vec<Employee>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based inclusive positions of the first and last row.
    pub range: Option<(usize, usize)>,
    pub links: Vec<PageLink>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_employees: Vec<Employee>,
    pub listed_employees: Vec<Employee>,
    pub page: Option<ListPage>,
    pub language: Option<Language>,
    pub config: Option<DirectoryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_employees(mut self, employees: Vec<Employee>) -> Self {
        self.affected_employees = employees;
        self
    }

    pub fn with_listed_employees(mut self, employees: Vec<Employee>) -> Self {
        self.listed_employees = employees;
        self
    }

    pub fn with_page(mut self, page: ListPage) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_config(mut self, config: DirectoryConfig) -> Self {
        self.config = Some(config);
        self
    }
}
