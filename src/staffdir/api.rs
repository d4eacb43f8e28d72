//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all staffdir operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (user-typed ids and prefixes become UUIDs)
//! - **Loads settings** the commands need, such as the reference lists
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the terminal**: No stdout, stderr, or formatting
//!
//! ## Ids
//!
//! Every method taking a selector accepts either a full UUID or a unique
//! prefix of at least four hex digits (the list view shows eight). A selector
//! matching nothing yields a warning message rather than an error, so bulk
//! operations keep going.
//!
//! ## Generic Over StorageBackend
//!
//! `StaffApi<B: StorageBackend>` is generic over the storage substrate:
//! - Production: `StaffApi<FsBackend>`
//! - Testing: `StaffApi<MemBackend>`

use crate::commands::{self, CmdMessage, CmdResult, StaffPaths};
use crate::config::DirectoryConfig;
use crate::error::Result;
use crate::i18n::{load_language, Language};
use crate::model::{EmployeeData, EmployeePatch};
use crate::store::{EmployeeStore, StorageBackend};
use uuid::Uuid;

pub use commands::config::ConfigAction;
pub use commands::language::LanguageAction;
pub use commands::list::ListQuery;

/// The main API facade for staffdir operations.
pub struct StaffApi<B: StorageBackend> {
    store: EmployeeStore<B>,
    paths: StaffPaths,
}

impl<B: StorageBackend> StaffApi<B> {
    pub fn new(backend: B, paths: StaffPaths) -> Self {
        Self {
            store: EmployeeStore::open(backend),
            paths,
        }
    }

    pub fn store(&self) -> &EmployeeStore<B> {
        &self.store
    }

    /// Mutable access, for subscribing to changes.
    pub fn store_mut(&mut self) -> &mut EmployeeStore<B> {
        &mut self.store
    }

    pub fn paths(&self) -> &StaffPaths {
        &self.paths
    }

    /// Current settings; a broken `config.json` reads as the defaults.
    pub fn load_config(&self) -> DirectoryConfig {
        DirectoryConfig::load_or_default(&self.paths.data_dir)
    }

    pub fn language(&self) -> Language {
        load_language(self.store.backend())
    }

    pub fn add_employee(&mut self, data: EmployeeData) -> Result<CmdResult> {
        let config = self.load_config();
        commands::add::run(&mut self.store, &config, data)
    }

    pub fn update_employee(&mut self, selector: &str, patch: &EmployeePatch) -> Result<CmdResult> {
        let Some(id) = self.resolve(selector)? else {
            return Ok(not_found(selector));
        };
        let config = self.load_config();
        commands::update::run(&mut self.store, &config, &id, patch)
    }

    pub fn delete_employees<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let mut ids = Vec::with_capacity(selectors.len());
        let mut missing = Vec::new();
        for selector in selectors {
            match self.resolve(selector.as_ref())? {
                Some(id) => ids.push(id),
                None => missing.push(selector.as_ref().to_string()),
            }
        }

        let mut result = commands::delete::run(&mut self.store, &ids)?;
        for selector in missing {
            result.add_message(not_found_message(&selector));
        }
        Ok(result)
    }

    pub fn show_employee(&self, selector: &str) -> Result<CmdResult> {
        match self.resolve(selector)? {
            Some(id) => commands::show::run(&self.store, &id),
            None => Ok(not_found(selector)),
        }
    }

    pub fn list_employees(&self, query: ListQuery) -> Result<CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn clear_employees(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn seed_employees(&mut self, count: usize) -> Result<CmdResult> {
        let config = self.load_config();
        let mut rng = rand::rng();
        commands::seed::run(&mut self.store, &config, count, &mut rng)
    }

    pub fn set_language(&mut self, action: LanguageAction) -> Result<CmdResult> {
        commands::language::run(self.store.backend(), action)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    fn resolve(&self, selector: &str) -> Result<Option<Uuid>> {
        commands::helpers::resolve_id(&self.store.get_all(), selector)
    }
}

fn not_found_message(selector: &str) -> CmdMessage {
    CmdMessage::warning(format!("Employee not found: {}", selector))
}

fn not_found(selector: &str) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(not_found_message(selector));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn api() -> StaffApi<MemBackend> {
        let temp = std::env::temp_dir().join(format!("staffdir-api-{}", Uuid::new_v4()));
        StaffApi::new(MemBackend::new(), StaffPaths { data_dir: temp })
    }

    fn data(email: &str) -> EmployeeData {
        EmployeeData {
            first_name: "Zeynep".into(),
            last_name: "Demir".into(),
            email: email.into(),
            phone: "+90 532 111 22 33".into(),
            date_of_birth: "1992-11-05".into(),
            date_of_employment: "2019-02-11".into(),
            department: "Design".into(),
            position: "Product Designer".into(),
        }
    }

    #[test]
    fn add_then_show_by_prefix() {
        let mut api = api();
        let added = api.add_employee(data("z@company.com")).unwrap();
        let employee = &added.affected_employees[0];

        let shown = api.show_employee(&employee.short_id()).unwrap();
        assert_eq!(shown.listed_employees, vec![employee.clone()]);
    }

    #[test]
    fn broken_config_does_not_block_mutations() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("config.json"), "{nope").unwrap();
        let mut api = StaffApi::new(
            MemBackend::new(),
            StaffPaths {
                data_dir: temp.path().to_path_buf(),
            },
        );

        assert_eq!(api.load_config(), DirectoryConfig::default());
        api.add_employee(data("z@company.com")).unwrap();
        api.seed_employees(2).unwrap();
        assert_eq!(api.store().len(), 3);
    }

    #[test]
    fn update_by_full_id() {
        let mut api = api();
        let id = api.add_employee(data("z@company.com")).unwrap().affected_employees[0].id;
        let patch = EmployeePatch {
            last_name: Some("Aksoy".into()),
            ..Default::default()
        };

        let result = api.update_employee(&id.to_string(), &patch).unwrap();
        assert_eq!(result.affected_employees[0].data.last_name, "Aksoy");
    }

    #[test]
    fn unknown_selector_warns() {
        let mut api = api();
        let result = api
            .update_employee("deadbeef", &EmployeePatch::default())
            .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));

        let result = api.show_employee("deadbeef").unwrap();
        assert!(result.listed_employees.is_empty());
    }

    #[test]
    fn bulk_delete_reports_missing_selectors() {
        let mut api = api();
        let a = api.add_employee(data("a@company.com")).unwrap().affected_employees[0].clone();
        let b = api.add_employee(data("b@company.com")).unwrap().affected_employees[0].clone();

        let result = api
            .delete_employees(&[a.short_id(), "deadbeef".to_string(), b.id.to_string()])
            .unwrap();

        assert_eq!(result.affected_employees.len(), 2);
        assert!(api.store().is_empty());
        assert!(
            result
                .messages
                .iter()
                .any(|m| m.content == "Employee not found: deadbeef")
        );
    }

    #[test]
    fn subscribers_see_api_mutations() {
        let mut api = api();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        api.store_mut()
            .subscribe(move |records| sink.borrow_mut().push(records.len()));

        api.seed_employees(3).unwrap();
        api.clear_employees().unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn language_round_trip() {
        let mut api = api();
        assert_eq!(api.language(), Language::En);
        api.set_language(LanguageAction::Toggle).unwrap();
        assert_eq!(api.language(), Language::Tr);
    }

    #[test]
    fn list_uses_query() {
        let mut api = api();
        api.seed_employees(12).unwrap();

        let result = api
            .list_employees(ListQuery {
                page: 2,
                ..ListQuery::new(10)
            })
            .unwrap();
        assert_eq!(result.listed_employees.len(), 2);
    }
}
