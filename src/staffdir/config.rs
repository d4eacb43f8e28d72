//! # Configuration
//!
//! Directory settings live in `config.json` next to the data files. A missing
//! file means defaults; unknown keys are ignored and missing keys take their
//! default, so older files keep loading.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `10` | Rows per page in `staffdir list` |
//! | `departments` | built-in list | Allowed values for `department` |
//! | `positions` | built-in list | Allowed values for `position` |

use crate::error::{Result, StaffError};
use crate::listing::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";

pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Product Management",
    "Design",
    "Marketing",
    "Sales",
    "Human Resources",
    "Finance",
    "Operations",
    "Customer Support",
    "Legal",
];

pub const POSITIONS: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Staff Engineer",
    "Engineering Manager",
    "Product Manager",
    "Senior Product Manager",
    "Product Designer",
    "UX Researcher",
    "Marketing Manager",
    "Sales Representative",
    "Account Executive",
    "HR Specialist",
    "Recruiter",
    "Financial Analyst",
    "Operations Manager",
    "Customer Success Manager",
    "Support Specialist",
    "Legal Counsel",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_departments")]
    pub departments: Vec<String>,

    #[serde(default = "default_positions")]
    pub positions: Vec<String>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_departments() -> Vec<String> {
    DEPARTMENTS.iter().map(|s| s.to_string()).collect()
}

fn default_positions() -> Vec<String> {
    POSITIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            departments: default_departments(),
            positions: default_positions(),
        }
    }
}

impl DirectoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StaffError::Io)?;
        let config: DirectoryConfig =
            serde_json::from_str(&content).map_err(StaffError::Serialization)?;
        Ok(config)
    }

    /// Like [`DirectoryConfig::load`], but an unreadable or malformed file
    /// yields the defaults. Every command reads settings through this.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            debug!(error = %e, "config unreadable, using defaults");
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StaffError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StaffError::Serialization)?;
        fs::write(config_path, content).map_err(StaffError::Io)?;
        Ok(())
    }

    /// Zero is rejected: a page must hold at least one row.
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(StaffError::Api("Page size must be at least 1".to_string()));
        }
        self.page_size = size;
        Ok(())
    }

    /// Display value for `key`. Lists are comma separated.
    pub fn get(&self, key: &str) -> Option<String> {
        match normalize_key(key).as_str() {
            "pagesize" => Some(self.page_size.to_string()),
            "departments" => Some(self.departments.join(", ")),
            "positions" => Some(self.positions.join(", ")),
            _ => None,
        }
    }

    /// Set `key` from its display form. Lists take comma separated values.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match normalize_key(key).as_str() {
            "pagesize" => {
                let size: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid page size: {}", value))?;
                self.set_page_size(size).map_err(|e| e.to_string())
            }
            "departments" => {
                self.departments = parse_list(key, value)?;
                Ok(())
            }
            "positions" => {
                self.positions = parse_list(key, value)?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn is_known_department(&self, value: &str) -> bool {
        self.departments.iter().any(|d| d == value)
    }

    pub fn is_known_position(&self, value: &str) -> bool {
        self.positions.iter().any(|p| p == value)
    }
}

/// Names of the keys accepted by [`DirectoryConfig::get`] and [`DirectoryConfig::set`].
pub const KEYS: &[&str] = &["page-size", "departments", "positions"];

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn parse_list(key: &str, value: &str) -> std::result::Result<Vec<String>, String> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if items.is_empty() {
        return Err(format!("{} needs at least one value", key));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = DirectoryConfig::default();
        assert_eq!(config.get("page-size").as_deref(), Some("10"));

        config.set("page_size", "20").unwrap();
        assert_eq!(config.page_size, 20);
        assert!(config.set("pageSize", "zero").is_err());
        assert!(config.set("page-size", "0").is_err());
        assert_eq!(config.page_size, 20);

        config.set("departments", "Tech, Ops ,").unwrap();
        assert_eq!(config.get("departments").as_deref(), Some("Tech, Ops"));
        assert!(config.set("positions", " , ").is_err());
        assert!(config.get("salary").is_none());
        assert!(config.set("salary", "1").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = DirectoryConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.departments.len(), 10);
        assert_eq!(config.positions.len(), 18);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = tempfile::tempdir().unwrap();
        let config = DirectoryConfig::load(temp.path().join("absent")).unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_malformed_config_reads_as_defaults() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{nope").unwrap();

        assert!(matches!(
            DirectoryConfig::load(temp.path()),
            Err(StaffError::Serialization(_))
        ));
        assert_eq!(
            DirectoryConfig::load_or_default(temp.path()),
            DirectoryConfig::default()
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();

        let mut config = DirectoryConfig::default();
        config.set_page_size(25).unwrap();
        config.save(temp.path()).unwrap();

        let loaded = DirectoryConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.page_size, 25);
        assert_eq!(loaded.departments, config.departments);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"departments": ["Tech"]}"#,
        )
        .unwrap();

        let loaded = DirectoryConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.page_size, 10);
        assert_eq!(loaded.departments, vec!["Tech".to_string()]);
        assert!(loaded.is_known_department("Tech"));
        assert!(!loaded.is_known_department("Engineering"));
        assert!(loaded.is_known_position("Recruiter"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = DirectoryConfig::default();
        assert!(config.set_page_size(0).is_err());
        assert_eq!(config.page_size, 10);
    }
}
