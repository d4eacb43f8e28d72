use crate::commands::{CmdMessage, CmdResult};
use crate::config::DirectoryConfig;
use crate::error::Result;
use crate::seed::{dedupe_email, random_employee};
use crate::store::{EmployeeStore, StorageBackend};
use crate::validation::validate_employee;
use rand::Rng;
use tracing::debug;

/// Add `count` random employees. Generated emails are numbered when they
/// collide with an existing record.
pub fn run<B: StorageBackend, R: Rng + ?Sized>(
    store: &mut EmployeeStore<B>,
    config: &DirectoryConfig,
    count: usize,
    rng: &mut R,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for _ in 0..count {
        let mut data = random_employee(rng, &config.departments, &config.positions);
        data.email = dedupe_email(&data.email, |email| !store.is_email_unique(email, None));

        let report = validate_employee(&data, None, &store.get_all());
        if !report.is_valid() {
            debug!(report = %report, "skipping generated employee");
            continue;
        }
        let employee = store.add(data)?;
        result.affected_employees.push(employee);
    }

    result.add_message(CmdMessage::success(format!(
        "Added {} sample employees",
        result.affected_employees.len()
    )));
    Ok(result)
}
