//! Knowledge Source Port - auxiliary knowledge-base data for an employee.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::employee::KnowledgeSnapshot;
use crate::domain::foundation::EmployeeId;

#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Knowledge base entries, knowledge gaps and resources for an employee.
    async fn snapshot(&self, employee_id: &EmployeeId) -> Result<KnowledgeSnapshot, ApiError>;
}
