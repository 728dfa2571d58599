//! Generation API Port - creates personalized course content.

use async_trait::async_trait;
use serde::Serialize;

use super::ApiError;
use crate::domain::course::CourseStructure;
use crate::domain::foundation::{ContentId, EmployeeId, UploadId};

/// Port for the course generation collaborator.
#[async_trait]
pub trait GenerationApi: Send + Sync {
    /// Generates course content for an employee.
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedCourse, ApiError>;
}

/// Request for generated course content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub employee_id: EmployeeId,
    pub title: String,
    pub description: String,
    pub skills_to_address: Vec<String>,
    pub difficulty_level: String,
    /// Material from a preceding `/upload`, possibly empty.
    pub upload_ids: Vec<UploadId>,
}

/// Generated, unpublished course content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCourse {
    pub content_id: ContentId,
    pub title: String,
    pub course_structure: CourseStructure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_names() {
        let request = GenerationRequest {
            employee_id: EmployeeId::new("emp-1").unwrap(),
            title: "SQL".to_string(),
            description: "d".to_string(),
            skills_to_address: vec!["Joins".to_string()],
            difficulty_level: "intermediate".to_string(),
            upload_ids: vec![UploadId::new("u1").unwrap()],
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["employeeId"], "emp-1");
        assert_eq!(json["skillsToAddress"], serde_json::json!(["Joins"]));
        assert_eq!(json["difficultyLevel"], "intermediate");
        assert_eq!(json["uploadIds"], serde_json::json!(["u1"]));
    }
}
