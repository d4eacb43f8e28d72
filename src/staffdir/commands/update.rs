use crate::commands::{CmdMessage, CmdResult};
use crate::config::DirectoryConfig;
use crate::error::{Result, StaffError};
use crate::model::EmployeePatch;
use crate::store::{EmployeeStore, StorageBackend};
use crate::validation::validate_employee;
use uuid::Uuid;

use super::helpers::check_reference_lists;

/// Validate the record as it would look after `patch` and store it.
///
/// The record's own email does not count as a duplicate. Only department and
/// position values the patch introduces are checked against the reference lists.
pub fn run<B: StorageBackend>(
    store: &mut EmployeeStore<B>,
    config: &DirectoryConfig,
    id: &Uuid,
    patch: &EmployeePatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(existing) = store.get_by_id(id) else {
        result.add_message(CmdMessage::warning(format!("Employee not found: {}", id)));
        return Ok(result);
    };

    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update"));
        return Ok(result.with_listed_employees(vec![existing]));
    }

    let mut merged = existing.data.clone();
    merged.apply(patch);

    let report = validate_employee(&merged, Some(id), &store.get_all());
    if !report.is_valid() {
        return Err(StaffError::Validation(report));
    }
    check_reference_lists(
        config,
        patch.department.as_deref(),
        patch.position.as_deref(),
    )?;

    match store.update(id, patch)? {
        Some(updated) => {
            result.add_message(CmdMessage::success(format!(
                "Employee updated ({}): {}",
                updated.short_id(),
                updated.data.full_name()
            )));
            Ok(result.with_affected_employees(vec![updated]))
        }
        None => {
            result.add_message(CmdMessage::warning(format!("Employee not found: {}", id)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmployeeData, Field};
    use crate::store::mem_backend::MemBackend;
    use crate::validation::FieldError;

    fn data(email: &str) -> EmployeeData {
        EmployeeData {
            first_name: "Mehmet".into(),
            last_name: "Kaya".into(),
            email: email.into(),
            phone: "05321234567".into(),
            date_of_birth: "1985-01-20".into(),
            date_of_employment: "2018-06-01".into(),
            department: "Sales".into(),
            position: "Account Executive".into(),
        }
    }

    fn setup() -> (EmployeeStore<MemBackend>, Uuid, Uuid) {
        let mut store = EmployeeStore::open(MemBackend::new());
        let a = store.add(data("a@company.com")).unwrap().id;
        let b = store.add(data("b@company.com")).unwrap().id;
        (store, a, b)
    }

    #[test]
    fn updates_fields_and_keeps_the_rest() {
        let (mut store, a, _) = setup();
        let patch = EmployeePatch {
            position: Some("Sales Representative".into()),
            ..Default::default()
        };

        let result = run(&mut store, &DirectoryConfig::default(), &a, &patch).unwrap();

        let updated = &result.affected_employees[0];
        assert_eq!(updated.data.position, "Sales Representative");
        assert_eq!(updated.data.email, "a@company.com");
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn keeping_own_email_is_not_a_duplicate() {
        let (mut store, a, _) = setup();
        let patch = EmployeePatch {
            email: Some("a@company.com".into()),
            first_name: Some("Ali".into()),
            ..Default::default()
        };

        assert!(run(&mut store, &DirectoryConfig::default(), &a, &patch).is_ok());
    }

    #[test]
    fn taking_another_email_is_rejected() {
        let (mut store, a, _) = setup();
        let patch = EmployeePatch {
            email: Some("b@company.com".into()),
            ..Default::default()
        };

        match run(&mut store, &DirectoryConfig::default(), &a, &patch) {
            Err(StaffError::Validation(report)) => {
                assert_eq!(
                    report.error(Field::Email),
                    Some(&FieldError::DuplicateEmail)
                );
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
        assert_eq!(store.get_by_id(&a).unwrap().data.email, "a@company.com");
    }

    #[test]
    fn unknown_id_warns() {
        let (mut store, _, _) = setup();
        let patch = EmployeePatch {
            first_name: Some("X".into()),
            ..Default::default()
        };

        let result = run(
            &mut store,
            &DirectoryConfig::default(),
            &Uuid::new_v4(),
            &patch,
        )
        .unwrap();
        assert!(result.affected_employees.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let (mut store, a, _) = setup();
        let result = run(
            &mut store,
            &DirectoryConfig::default(),
            &a,
            &EmployeePatch::default(),
        )
        .unwrap();

        assert!(result.affected_employees.is_empty());
        assert!(store.get_by_id(&a).unwrap().updated_at.is_none());
    }

    #[test]
    fn existing_off_list_values_survive_unrelated_edits() {
        let mut store = EmployeeStore::open(MemBackend::new());
        let id = store
            .add(EmployeeData {
                department: "Tech".into(),
                ..data("c@company.com")
            })
            .unwrap()
            .id;
        let patch = EmployeePatch {
            phone: Some("0533 999 8877".into()),
            ..Default::default()
        };

        assert!(run(&mut store, &DirectoryConfig::default(), &id, &patch).is_ok());

        let patch = EmployeePatch {
            department: Some("Tech".into()),
            ..Default::default()
        };
        assert!(run(&mut store, &DirectoryConfig::default(), &id, &patch).is_err());
    }
}
