//! Random sample employees for demos and manual testing.

use crate::model::EmployeeData;
use rand::seq::IndexedRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ahmet", "Mehmet", "Ayşe", "Fatma", "Ali", "Zeynep", "Mustafa", "Elif", "Can", "Deniz", "Emre",
    "Selin", "Burak", "Ebru", "Cem", "Merve", "Kemal", "Gamze", "Oğuz", "Burcu", "Murat", "Gizem",
    "Serkan", "Pınar", "Tolga",
];

const LAST_NAMES: &[&str] = &[
    "Yılmaz", "Kaya", "Demir", "Çelik", "Şahin", "Öz", "Aydın", "Arslan", "Özdemir", "Koç",
    "Aktaş", "Çetin", "Yıldız", "Polat", "Korkmaz", "Erdoğan", "Güneş", "Aksoy", "Acar", "Kurt",
    "Özkan", "Şen", "Aslan", "Tekin", "Doğan",
];

const PHONE_PREFIXES: &[&str] = &["532", "533", "534", "535", "536", "537", "538", "539"];

const EMAIL_DOMAIN: &str = "company.com";

/// Replace Turkish letters with their closest ASCII counterparts.
pub fn transliterate(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ğ' | 'Ğ' => 'g',
            'ü' | 'Ü' => 'u',
            'ş' | 'Ş' => 's',
            'ı' | 'İ' => 'i',
            'ö' | 'Ö' => 'o',
            'ç' | 'Ç' => 'c',
            other => other,
        })
        .collect()
}

/// `first.last@company.com`, ASCII only.
pub fn email_for(first_name: &str, last_name: &str) -> String {
    format!(
        "{}.{}@{}",
        transliterate(first_name).to_lowercase(),
        transliterate(last_name).to_lowercase(),
        EMAIL_DOMAIN
    )
}

/// Make `email` unique against `is_taken` by numbering the local part.
pub fn dedupe_email(email: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(email) {
        return email.to_string();
    }
    let (local, domain) = email.split_once('@').unwrap_or((email, EMAIL_DOMAIN));
    (2..)
        .map(|n| format!("{}{}@{}", local, n, domain))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| email.to_string())
}

fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = PHONE_PREFIXES.choose(rng).copied().unwrap_or("532");
    format!(
        "0{} {} {}",
        prefix,
        rng.random_range(100..1000),
        rng.random_range(1000..10000)
    )
}

fn date_in<R: Rng + ?Sized>(rng: &mut R, first_year: i32, years: i32) -> String {
    format!(
        "{}-{:02}-{:02}",
        first_year + rng.random_range(0..years),
        rng.random_range(1..=12),
        rng.random_range(1..=28)
    )
}

/// One random employee. Birth years fall in 1970-1999 and hire years in
/// 2015-2024, so every generated record passes validation.
pub fn random_employee<R: Rng + ?Sized>(
    rng: &mut R,
    departments: &[String],
    positions: &[String],
) -> EmployeeData {
    let first_name = FIRST_NAMES.choose(rng).copied().unwrap_or("Ali");
    let last_name = LAST_NAMES.choose(rng).copied().unwrap_or("Kaya");

    EmployeeData {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email_for(first_name, last_name),
        phone: phone_number(rng),
        date_of_birth: date_in(rng, 1970, 30),
        date_of_employment: date_in(rng, 2015, 10),
        department: departments.choose(rng).cloned().unwrap_or_default(),
        position: positions.choose(rng).cloned().unwrap_or_default(),
    }
}
