//! Profile Reader Port - the HR records the context aggregator reads.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::employee::{CourseRecord, EmployeeProfile, EnrollmentRecord, SkillAssessment};
use crate::domain::foundation::EmployeeId;

/// Read access to employee profile data.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Fetches an employee with the position joined in.
    async fn employee(&self, id: &EmployeeId) -> Result<Option<EmployeeProfile>, ApiError>;

    /// All skill-assessment snapshots for an employee, in any order.
    async fn skill_assessments(&self, id: &EmployeeId) -> Result<Vec<SkillAssessment>, ApiError>;

    /// Course enrollments of an employee.
    async fn enrollments(&self, id: &EmployeeId) -> Result<Vec<EnrollmentRecord>, ApiError>;

    /// Looks up one course by id.
    async fn course(&self, course_id: &str) -> Result<Option<CourseRecord>, ApiError>;
}
