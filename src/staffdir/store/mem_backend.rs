use super::backend::{validate_key, StorageBackend};
use crate::error::{Result, StaffError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since staffdir is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing key validation. Used to plant corrupt data.
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        if *self.simulate_write_error.borrow() {
            return Err(StaffError::Storage("Simulated write error".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        if *self.simulate_write_error.borrow() {
            return Err(StaffError::Storage("Simulated write error".to_string()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.get_item("employees").unwrap(), None);
    }

    #[test]
    fn set_then_get_and_remove() {
        let backend = MemBackend::new();
        backend.set_item("app-language", "tr").unwrap();
        assert_eq!(backend.get_item("app-language").unwrap().as_deref(), Some("tr"));

        backend.remove_item("app-language").unwrap();
        assert_eq!(backend.get_item("app-language").unwrap(), None);
    }

    #[test]
    fn simulated_write_error_leaves_value_untouched() {
        let backend = MemBackend::new().with_item("employees", "[]");
        backend.set_simulate_write_error(true);
        assert!(backend.set_item("employees", "[1]").is_err());
        assert_eq!(backend.get_item("employees").unwrap().as_deref(), Some("[]"));
    }
}
