use crate::commands::{CmdMessage, CmdResult};
use crate::config::DirectoryConfig;
use crate::error::{Result, StaffError};
use crate::model::EmployeeData;
use crate::store::{EmployeeStore, StorageBackend};
use crate::validation::validate_employee;

use super::helpers::check_reference_lists;

pub fn run<B: StorageBackend>(
    store: &mut EmployeeStore<B>,
    config: &DirectoryConfig,
    data: EmployeeData,
) -> Result<CmdResult> {
    let report = validate_employee(&data, None, &store.get_all());
    if !report.is_valid() {
        return Err(StaffError::Validation(report));
    }
    check_reference_lists(config, Some(&data.department), Some(&data.position))?;

    let employee = store.add(data)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee added ({}): {}",
        employee.short_id(),
        employee.data.full_name()
    )));
    Ok(result.with_affected_employees(vec![employee]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use crate::store::mem_backend::MemBackend;
    use crate::validation::FieldError;

    fn valid_data(email: &str) -> EmployeeData {
        EmployeeData {
            first_name: "Ayşe".into(),
            last_name: "Yılmaz".into(),
            email: email.into(),
            phone: "0532 123 4567".into(),
            date_of_birth: "1990-04-12".into(),
            date_of_employment: "2021-09-01".into(),
            department: "Engineering".into(),
            position: "Software Engineer".into(),
        }
    }

    #[test]
    fn adds_valid_employee() {
        let mut store = EmployeeStore::open(MemBackend::new());
        let config = DirectoryConfig::default();

        let result = run(&mut store, &config, valid_data("ayse@company.com")).unwrap();

        assert_eq!(result.affected_employees.len(), 1);
        assert_eq!(store.len(), 1);
        assert!(result.messages[0].content.contains("Ayşe Yılmaz"));
    }

    #[test]
    fn invalid_employee_is_rejected_with_report() {
        let mut store = EmployeeStore::open(MemBackend::new());
        let config = DirectoryConfig::default();
        let data = EmployeeData {
            email: "not-an-email".into(),
            first_name: String::new(),
            ..valid_data("x")
        };

        match run(&mut store, &config, data) {
            Err(StaffError::Validation(report)) => {
                assert_eq!(report.error(Field::Email), Some(&FieldError::InvalidEmail));
                assert_eq!(
                    report.error(Field::FirstName),
                    Some(&FieldError::Required(Field::FirstName))
                );
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mut store = EmployeeStore::open(MemBackend::new());
        let config = DirectoryConfig::default();
        run(&mut store, &config, valid_data("dup@company.com")).unwrap();

        let err = run(&mut store, &config, valid_data("dup@company.com")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid employee: email: Email already exists");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_department_is_rejected() {
        let mut store = EmployeeStore::open(MemBackend::new());
        let config = DirectoryConfig::default();
        let data = EmployeeData {
            department: "Tech".into(),
            ..valid_data("a@company.com")
        };

        assert!(matches!(
            run(&mut store, &config, data),
            Err(StaffError::Api(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn storage_failure_propagates() {
        let mut store = EmployeeStore::open(MemBackend::new());
        store.backend().set_simulate_write_error(true);

        let result = run(
            &mut store,
            &DirectoryConfig::default(),
            valid_data("a@company.com"),
        );
        assert!(result.is_err());
        assert!(store.is_empty());
    }
}
