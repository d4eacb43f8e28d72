use super::backend::{StorageBackend, EMPLOYEES_KEY};
use super::events::{Observers, SubscriptionId};
use crate::error::{Result, StaffError};
use crate::model::{Employee, EmployeeData, EmployeePatch};
use crate::validation;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// Sole owner of the employee collection.
///
/// Every successful mutation writes the full list under [`EMPLOYEES_KEY`] and
/// then notifies subscribers with the new list. If the write fails the
/// in-memory change is undone and nobody is notified, so the list in memory and
/// the stored snapshot never diverge.
pub struct EmployeeStore<B: StorageBackend> {
    backend: B,
    employees: Vec<Employee>,
    observers: Observers,
}

impl<B: StorageBackend> EmployeeStore<B> {
    /// Load the stored list. A missing, unreadable or corrupt snapshot yields an
    /// empty store.
    pub fn open(backend: B) -> Self {
        let employees = load_employees(&backend);
        Self {
            backend,
            employees,
            observers: Observers::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// A copy of every record, in insertion order.
    pub fn get_all(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    pub fn get_by_id(&self, id: &Uuid) -> Option<Employee> {
        self.employees.iter().find(|e| &e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn is_email_unique(&self, email: &str, exclude_id: Option<&Uuid>) -> bool {
        validation::is_email_unique(&self.employees, email, exclude_id)
    }

    pub fn add(&mut self, data: EmployeeData) -> Result<Employee> {
        let employee = Employee::new(data);
        self.employees.push(employee.clone());

        if let Err(e) = self.persist() {
            self.employees.pop();
            return Err(e);
        }
        debug!(id = %employee.id, "employee added");
        self.notify();
        Ok(employee)
    }

    /// Merge `patch` into the record with `id`. Returns `Ok(None)` without side
    /// effects when no such record exists.
    pub fn update(&mut self, id: &Uuid, patch: &EmployeePatch) -> Result<Option<Employee>> {
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };

        let previous = self.employees[pos].clone();
        let record = &mut self.employees[pos];
        record.data.apply(patch);
        record.updated_at = Some(Utc::now());

        if let Err(e) = self.persist() {
            self.employees[pos] = previous;
            return Err(e);
        }
        debug!(id = %id, "employee updated");
        self.notify();
        Ok(Some(self.employees[pos].clone()))
    }

    /// Remove the record with `id`. Returns `Ok(false)` without side effects
    /// when no such record exists.
    pub fn delete(&mut self, id: &Uuid) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };

        let removed = self.employees.remove(pos);
        if let Err(e) = self.persist() {
            self.employees.insert(pos, removed);
            return Err(e);
        }
        debug!(id = %id, "employee deleted");
        self.notify();
        Ok(true)
    }

    /// Remove every record. Returns how many were removed.
    pub fn clear(&mut self) -> Result<usize> {
        if self.employees.is_empty() {
            return Ok(0);
        }

        let previous = std::mem::take(&mut self.employees);
        if let Err(e) = self.persist() {
            self.employees = previous;
            return Err(e);
        }
        debug!(count = previous.len(), "employees cleared");
        self.notify();
        Ok(previous.len())
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[Employee]) + 'static,
    {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.employees.iter().position(|e| &e.id == id)
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.employees).map_err(StaffError::Serialization)?;
        self.backend.set_item(EMPLOYEES_KEY, &json)
    }

    fn notify(&mut self) {
        self.observers.notify(&self.employees);
    }
}

fn load_employees<B: StorageBackend>(backend: &B) -> Vec<Employee> {
    let raw = match backend.get_item(EMPLOYEES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            debug!(error = %e, "employee snapshot unreadable, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(employees) => employees,
        Err(e) => {
            debug!(error = %e, "employee snapshot corrupt, starting empty");
            Vec::new()
        }
    }
}
