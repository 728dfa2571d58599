//! In-memory HR directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::directory::{EmployeeSummary, GroupDimension, GroupSummary};
use crate::domain::foundation::EmployeeId;
use crate::ports::{ApiError, Directory};

/// A recorded directory call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryCall {
    Employees,
    Groups(GroupDimension),
}

/// Directory backed by vectors, with optional failure injection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    employees: Arc<Mutex<Vec<EmployeeSummary>>>,
    groups: Arc<Mutex<HashMap<GroupDimension, Vec<GroupSummary>>>>,
    failure: Arc<Mutex<Option<ApiError>>>,
    calls: Arc<Mutex<Vec<DirectoryCall>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(self, id: &str, name: &str, department: Option<&str>) -> Self {
        self.employees.lock().unwrap().push(EmployeeSummary {
            id: EmployeeId::new(id).expect("employee id must not be blank"),
            name: name.to_string(),
            department: department.map(str::to_string),
            position: None,
        });
        self
    }

    pub fn with_group(self, dimension: GroupDimension, group: GroupSummary) -> Self {
        self.groups
            .lock()
            .unwrap()
            .entry(dimension)
            .or_default()
            .push(group);
        self
    }

    /// Makes every subsequent call fail with `error`.
    pub fn failing_with(self, error: ApiError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    /// Replaces the employee list, as if the backend changed between calls.
    pub fn set_employees(&self, employees: Vec<EmployeeSummary>) {
        *self.employees.lock().unwrap() = employees;
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<DirectoryCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: DirectoryCall) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn list_employees(&self) -> Result<Vec<EmployeeSummary>, ApiError> {
        self.record(DirectoryCall::Employees)?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn list_groups(&self, dimension: GroupDimension) -> Result<Vec<GroupSummary>, ApiError> {
        self.record(DirectoryCall::Groups(dimension))?;
        Ok(self
            .groups
            .lock()
            .unwrap()
            .get(&dimension)
            .cloned()
            .unwrap_or_default())
    }
}
