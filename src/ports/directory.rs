//! Directory Port - read-only HR listings.
//!
//! Implementations must not cache: every call is a fresh read.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::directory::{EmployeeSummary, GroupDimension, GroupSummary};

#[async_trait]
pub trait Directory: Send + Sync {
    /// Lists all employees.
    async fn list_employees(&self) -> Result<Vec<EmployeeSummary>, ApiError>;

    /// Lists groups along a dimension with their member counts.
    async fn list_groups(&self, dimension: GroupDimension) -> Result<Vec<GroupSummary>, ApiError>;
}
