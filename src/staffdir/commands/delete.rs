use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::listing::Selection;
use crate::store::{EmployeeStore, StorageBackend};
use uuid::Uuid;

/// Delete every selected record. Ids that match nothing produce a warning and
/// do not stop the rest of the batch.
pub fn run<B: StorageBackend>(store: &mut EmployeeStore<B>, ids: &[Uuid]) -> Result<CmdResult> {
    let mut selection = Selection::new();
    for id in ids {
        selection.set(*id, true);
    }

    let mut result = CmdResult::default();
    for id in selection.ids() {
        let Some(employee) = store.get_by_id(id) else {
            result.add_message(CmdMessage::warning(format!("Employee not found: {}", id)));
            continue;
        };
        if store.delete(id)? {
            result.add_message(CmdMessage::success(format!(
                "Employee deleted ({}): {}",
                employee.short_id(),
                employee.data.full_name()
            )));
            result.affected_employees.push(employee);
        }
    }

    Ok(result)
}
