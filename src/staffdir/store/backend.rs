use crate::error::{Result, StaffError};

/// Key holding the serialized employee list.
pub const EMPLOYEES_KEY: &str = "employees";

/// Key holding the active language code.
pub const LANGUAGE_KEY: &str = "app-language";

/// Abstract interface for the durable key-value substrate.
///
/// Values are opaque strings; callers own the encoding. Methods take `&self`
/// so a backend can be shared by the record store and the language settings.
pub trait StorageBackend {
    /// Read the value under `key`.
    /// Returns Ok(None) if the key has never been written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    /// MUST be atomic: readers see either the old or the new value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// Keys double as file names, so they are restricted to a portable charset.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StaffError::Storage(format!("Invalid storage key: {:?}", key)))
    }
}
