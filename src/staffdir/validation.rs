//! # Validation Rules
//!
//! Stateless predicates over form input plus [`validate_employee`], which runs
//! them per field and collects at most one error per field.
//!
//! Every check that depends on the current moment has an `_at`/`_on` variant
//! taking the moment explicitly; the plain variants use the local clock.

use crate::model::{Employee, EmployeeData, Field};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Minimum age, in whole years, for a new hire.
pub const MIN_AGE_YEARS: u32 = 18;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s+()\-]{10,}$").expect("valid phone regex"));

pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// True unless another record already uses exactly this email.
pub fn is_email_unique(records: &[Employee], email: &str, exclude_id: Option<&Uuid>) -> bool {
    !records
        .iter()
        .any(|e| e.data.email == email && Some(&e.id) != exclude_id)
}

/// Parse a date field: either `YYYY-MM-DD` (taken as midnight UTC) or an
/// RFC 3339 timestamp.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| Utc.from_utc_datetime(&dt));
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// The calendar date part of a date field.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    parse_instant(value).map(|dt| dt.date_naive())
}

pub fn is_date_not_future(value: &str) -> bool {
    is_date_not_future_at(value, Utc::now())
}

/// Unparsable input is never "not in the future".
pub fn is_date_not_future_at(value: &str, now: DateTime<Utc>) -> bool {
    parse_instant(value).is_some_and(|instant| instant <= now)
}

pub fn meets_min_age(date_of_birth: &str, min_years: u32) -> bool {
    meets_min_age_on(date_of_birth, min_years, Local::now().date_naive())
}

pub fn meets_min_age_on(date_of_birth: &str, min_years: u32, today: NaiveDate) -> bool {
    let Some(birth) = parse_date(date_of_birth) else {
        return false;
    };
    age_on(birth, today) >= i64::from(min_years)
}

/// Whole years between `birth` and `today`; negative for future births.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i64 {
    let mut age = i64::from(today.year()) - i64::from(birth.year());
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
    DuplicateEmail,
    InvalidPhone,
    FutureDate,
    Underage,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => {
                let label = match field {
                    Field::FirstName => "First name",
                    Field::LastName => "Last name",
                    Field::Email => "Email",
                    Field::Phone => "Phone",
                    Field::DateOfBirth => "Date of birth",
                    Field::DateOfEmployment => "Date of employment",
                    Field::Department => "Department",
                    Field::Position => "Position",
                };
                write!(f, "{} is required", label)
            }
            FieldError::InvalidEmail => f.write_str("Invalid email format"),
            FieldError::DuplicateEmail => f.write_str("Email already exists"),
            FieldError::InvalidPhone => f.write_str("Invalid phone format"),
            FieldError::FutureDate => f.write_str("Date of birth cannot be in the future"),
            FieldError::Underage => write!(
                f,
                "Employee must be at least {} years old",
                MIN_AGE_YEARS
            ),
        }
    }
}

/// Outcome of [`validate_employee`]: only failing fields appear in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// `field name -> message`, in field order.
    pub fn messages(&self) -> BTreeMap<Field, String> {
        self.errors
            .iter()
            .map(|(field, err)| (*field, err.to_string()))
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, err)| format!("{}: {}", field, err))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

pub fn validate_employee(
    candidate: &EmployeeData,
    editing_id: Option<&Uuid>,
    records: &[Employee],
) -> ValidationReport {
    validate_employee_at(candidate, editing_id, records, Local::now())
}

pub fn validate_employee_at<Tz: TimeZone>(
    candidate: &EmployeeData,
    editing_id: Option<&Uuid>,
    records: &[Employee],
    now: DateTime<Tz>,
) -> ValidationReport {
    let today = now.date_naive();
    let now = now.with_timezone(&Utc);
    let mut report = ValidationReport::default();

    let mut check = |field: Field, outcome: Option<FieldError>| {
        if let Some(err) = outcome {
            report.errors.insert(field, err);
        }
    };

    check(Field::FirstName, require(candidate, Field::FirstName));
    check(Field::LastName, require(candidate, Field::LastName));

    let email = &candidate.email;
    check(
        Field::Email,
        require(candidate, Field::Email).or_else(|| {
            if !is_valid_email(email) {
                Some(FieldError::InvalidEmail)
            } else if !is_email_unique(records, email, editing_id) {
                Some(FieldError::DuplicateEmail)
            } else {
                None
            }
        }),
    );

    check(
        Field::Phone,
        require(candidate, Field::Phone)
            .or_else(|| (!is_valid_phone(&candidate.phone)).then_some(FieldError::InvalidPhone)),
    );

    let dob = &candidate.date_of_birth;
    check(
        Field::DateOfBirth,
        require(candidate, Field::DateOfBirth).or_else(|| {
            if !is_date_not_future_at(dob, now) {
                Some(FieldError::FutureDate)
            } else if !meets_min_age_on(dob, MIN_AGE_YEARS, today) {
                Some(FieldError::Underage)
            } else {
                None
            }
        }),
    );

    for field in [Field::DateOfEmployment, Field::Department, Field::Position] {
        check(field, require(candidate, field));
    }

    report
}

fn require(candidate: &EmployeeData, field: Field) -> Option<FieldError> {
    (!required(candidate.get(field))).then_some(FieldError::Required(field))
}
