use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{EmployeeStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut EmployeeStore<B>) -> Result<CmdResult> {
    let removed = store.get_all();
    let count = store.clear()?;

    let mut result = CmdResult::default();
    if count == 0 {
        result.add_message(CmdMessage::info("No employees to clear"));
    } else {
        result.add_message(CmdMessage::success(format!("Cleared {} employees", count)));
    }
    Ok(result.with_affected_employees(removed))
}
