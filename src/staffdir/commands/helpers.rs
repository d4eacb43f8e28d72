use crate::config::DirectoryConfig;
use crate::error::{Result, StaffError};
use crate::model::Employee;
use uuid::Uuid;

/// Shortest id prefix accepted, matching the width shown in listings.
pub const MIN_PREFIX_LEN: usize = 4;

/// Resolve a user-supplied id: a full UUID or a unique prefix of its hex form.
///
/// Returns `Ok(None)` when nothing matches. An ambiguous or malformed prefix
/// is an error, since acting on a guess could hit the wrong record.
pub fn resolve_id(records: &[Employee], selector: &str) -> Result<Option<Uuid>> {
    let selector = selector.trim();
    if let Ok(id) = Uuid::parse_str(selector) {
        return Ok(records.iter().find(|e| e.id == id).map(|e| e.id));
    }

    let prefix: String = selector
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .to_ascii_lowercase();
    if prefix.len() < MIN_PREFIX_LEN || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StaffError::Api(format!("Invalid employee id: {}", selector)));
    }

    let matches: Vec<Uuid> = records
        .iter()
        .filter(|e| e.id.simple().to_string().starts_with(&prefix))
        .map(|e| e.id)
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [id] => Ok(Some(*id)),
        _ => Err(StaffError::Api(format!(
            "Id prefix {} matches {} employees, use more characters",
            selector,
            matches.len()
        ))),
    }
}

/// Department and position must come from the configured reference lists.
/// Empty values are left to field validation.
pub fn check_reference_lists(
    config: &DirectoryConfig,
    department: Option<&str>,
    position: Option<&str>,
) -> Result<()> {
    if let Some(department) = department.filter(|d| !d.trim().is_empty()) {
        if !config.is_known_department(department) {
            return Err(StaffError::Api(format!(
                "Unknown department: {} (known: {})",
                department,
                config.departments.join(", ")
            )));
        }
    }
    if let Some(position) = position.filter(|p| !p.trim().is_empty()) {
        if !config.is_known_position(position) {
            return Err(StaffError::Api(format!(
                "Unknown position: {} (known: {})",
                position,
                config.positions.join(", ")
            )));
        }
    }
    Ok(())
}
