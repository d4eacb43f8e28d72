//! # Localization
//!
//! Two UI languages, English and Turkish. The active language is persisted as
//! a bare code under [`LANGUAGE_KEY`] so it survives restarts. Lookups fall back
//! to the key itself, which keeps a missing translation visible but harmless.

use crate::error::Result;
use crate::store::{StorageBackend, LANGUAGE_KEY};
use crate::validation::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Tr,
            Language::Tr => Language::En,
        }
    }

    /// Translate `key`, or return the key unchanged when there is no entry.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let table = match self {
            Language::En => EN,
            Language::Tr => TR,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }

    /// `MM/DD/YYYY` in English, `DD/MM/YYYY` in Turkish.
    ///
    /// Empty input formats as empty; anything that is not a date is passed
    /// through untouched.
    pub fn format_date(&self, value: &str) -> String {
        if value.trim().is_empty() {
            return String::new();
        }
        match parse_date(value) {
            Some(date) => match self {
                Language::En => date.format("%m/%d/%Y").to_string(),
                Language::Tr => date.format("%d/%m/%Y").to_string(),
            },
            None => value.to_string(),
        }
    }

    /// Reverse of [`Language::format_date`]: a displayed date back to
    /// `YYYY-MM-DD`. Month and day may be written without leading zeros.
    /// Returns `None` unless the parts name a real calendar day.
    pub fn parse_display_date(&self, formatted: &str) -> Option<String> {
        let parts: Vec<&str> = formatted.trim().split('/').collect();
        let &[a, b, year] = parts.as_slice() else {
            return None;
        };
        let (month, day) = match self {
            Language::En => (a, b),
            Language::Tr => (b, a),
        };
        let is_num = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if !is_num(year) || !is_num(month) || !is_num(day) {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(
            year.parse().ok()?,
            month.parse().ok()?,
            day.parse().ok()?,
        )?;
        Some(date.format("%Y-%m-%d").to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "tr" => Ok(Language::Tr),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

/// The persisted language, or English when nothing valid is stored.
pub fn load_language<B: StorageBackend>(backend: &B) -> Language {
    match backend.get_item(LANGUAGE_KEY) {
        Ok(Some(code)) => code.parse().unwrap_or_else(|e| {
            debug!(error = %e, "ignoring stored language");
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(e) => {
            debug!(error = %e, "language unreadable, using default");
            Language::default()
        }
    }
}

pub fn save_language<B: StorageBackend>(backend: &B, language: Language) -> Result<()> {
    backend.set_item(LANGUAGE_KEY, language.code())
}

const EN: &[(&str, &str)] = &[
    ("employeeList", "Employees"),
    ("addEmployee", "Add Employee"),
    ("addNew", "Add New"),
    ("editEmployee", "Edit Employee"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    ("confirmDelete", "Confirm Delete"),
    (
        "confirmDeleteMessage",
        "Are you sure you want to delete this employee? This action cannot be undone.",
    ),
    ("firstName", "First Name"),
    ("lastName", "Last Name"),
    ("dateOfEmployment", "Date of Employment"),
    ("dateOfBirth", "Date of Birth"),
    ("phone", "Phone"),
    ("email", "Email"),
    ("department", "Department"),
    ("position", "Position"),
    ("selectDepartment", "Select Department"),
    ("selectPosition", "Select Position"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("actions", "Actions"),
    ("showing", "Showing"),
    ("of", "of"),
    ("itemsPerPage", "Items per page"),
    ("employeesSelected", "employees selected"),
    ("clearSelection", "Cancel"),
    (
        "confirmDeleteMultiple",
        "Are you sure you want to delete {count} employees? This action cannot be undone.",
    ),
    ("clearData", "Clear Data"),
    (
        "confirmClearData",
        "Are you sure you want to clear all employee data? This action cannot be undone.",
    ),
    ("noEmployees", "No employees found."),
    ("createdAt", "Created"),
    ("updatedAt", "Updated"),
    ("id", "ID"),
];

const TR: &[(&str, &str)] = &[
    ("employeeList", "Çalışanlar"),
    ("addEmployee", "Çalışan Ekle"),
    ("addNew", "Yeni Ekle"),
    ("editEmployee", "Çalışanı Düzenle"),
    ("edit", "Düzenle"),
    ("delete", "Sil"),
    ("confirmDelete", "Silmeyi Onayla"),
    (
        "confirmDeleteMessage",
        "Bu çalışanı silmek istediğinizden emin misiniz? Bu işlem geri alınamaz.",
    ),
    ("firstName", "Ad"),
    ("lastName", "Soyad"),
    ("dateOfEmployment", "İşe Başlama Tarihi"),
    ("dateOfBirth", "Doğum Tarihi"),
    ("phone", "Telefon"),
    ("email", "E-posta"),
    ("department", "Departman"),
    ("position", "Pozisyon"),
    ("selectDepartment", "Departman Seçin"),
    ("selectPosition", "Pozisyon Seçin"),
    ("save", "Kaydet"),
    ("cancel", "İptal"),
    ("actions", "İşlemler"),
    ("showing", "Gösteriliyor"),
    ("of", "/"),
    ("itemsPerPage", "Sayfa başına"),
    ("employeesSelected", "çalışan seçildi"),
    ("clearSelection", "İptal"),
    (
        "confirmDeleteMultiple",
        "{count} çalışanı silmek istediğinizden emin misiniz? Bu işlem geri alınamaz.",
    ),
    ("clearData", "Verileri Temizle"),
    (
        "confirmClearData",
        "Tüm çalışan verilerini temizlemek istediğinizden emin misiniz? Bu işlem geri alınamaz.",
    ),
    ("noEmployees", "Çalışan bulunamadı."),
    ("createdAt", "Oluşturulma"),
    ("updatedAt", "Güncellenme"),
    ("id", "Kimlik"),
];
