use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{EmployeeStore, StorageBackend};
use uuid::Uuid;

pub fn run<B: StorageBackend>(store: &EmployeeStore<B>, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.get_by_id(id) {
        Some(employee) => Ok(result.with_listed_employees(vec![employee])),
        None => {
            result.add_message(CmdMessage::warning(format!("Employee not found: {}", id)));
            Ok(result)
        }
    }
}
