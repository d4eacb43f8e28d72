use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The user-editable part of an employee record.
///
/// Every field is plain text, exactly as it was entered. Missing fields
/// deserialize as empty strings so partially filled records still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub date_of_employment: String,
    pub department: String,
    pub position: String,
}

impl EmployeeData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::DateOfBirth => &self.date_of_birth,
            Field::DateOfEmployment => &self.date_of_employment,
            Field::Department => &self.department,
            Field::Position => &self.position,
        }
    }

    /// Overlay every field present in `patch`. The patch `id` is not a data field
    /// and is never applied here.
    pub fn apply(&mut self, patch: &EmployeePatch) {
        let pairs = [
            (&mut self.first_name, &patch.first_name),
            (&mut self.last_name, &patch.last_name),
            (&mut self.email, &patch.email),
            (&mut self.phone, &patch.phone),
            (&mut self.date_of_birth, &patch.date_of_birth),
            (&mut self.date_of_employment, &patch.date_of_employment),
            (&mut self.department, &patch.department),
            (&mut self.position, &patch.position),
        ];
        for (target, value) in pairs {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: EmployeeData,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn new(data: EmployeeData) -> Self {
        Self {
            id: Uuid::new_v4(),
            data,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// First eight characters of the id, as shown in listings.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// A partial update. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeePatch {
    /// Accepted so callers can pass a whole record back, but the store always
    /// keeps the original id.
    pub id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub date_of_employment: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.date_of_birth.is_none()
            && self.date_of_employment.is_none()
            && self.department.is_none()
            && self.position.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    DateOfEmployment,
    Department,
    Position,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::DateOfEmployment,
        Field::DateOfBirth,
        Field::Phone,
        Field::Email,
        Field::Department,
        Field::Position,
    ];

    /// The serialized (and translation key) name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::DateOfBirth => "dateOfBirth",
            Field::DateOfEmployment => "dateOfEmployment",
            Field::Department => "department",
            Field::Position => "position",
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Field::DateOfBirth | Field::DateOfEmployment)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts the serialized name (`lastName`) or a kebab/snake spelling
    /// (`last-name`, `last_name`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}
