//! EmployeeContext - the read-only profile bundle merged into assistant calls.
//!
//! A context is assembled once and never mutated. Reloading produces a new
//! instance that replaces the old one wholesale.

use serde::Serialize;

use super::records::{
    EmployeeProfile, EnrolledCourse, KnowledgeGap, KnowledgeItem, KnowledgeSnapshot,
    LearningResource, MissingSkill, Skill,
};
use crate::domain::foundation::{EmployeeId, Percentage, Timestamp};

/// Immutable employee profile bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeContext {
    employee: EmployeeProfile,
    skills: Vec<Skill>,
    missing_skills: Vec<MissingSkill>,
    courses: Vec<EnrolledCourse>,
    knowledge: KnowledgeSnapshot,
    loaded_at: Timestamp,
}

impl EmployeeContext {
    pub fn new(
        employee: EmployeeProfile,
        skills: Vec<Skill>,
        missing_skills: Vec<MissingSkill>,
        courses: Vec<EnrolledCourse>,
        knowledge: KnowledgeSnapshot,
    ) -> Self {
        Self {
            employee,
            skills,
            missing_skills,
            courses,
            knowledge,
            loaded_at: Timestamp::now(),
        }
    }

    pub fn employee(&self) -> &EmployeeProfile {
        &self.employee
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee.id
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn missing_skills(&self) -> &[MissingSkill] {
        &self.missing_skills
    }

    pub fn courses(&self) -> &[EnrolledCourse] {
        &self.courses
    }

    pub fn knowledge_base(&self) -> &[KnowledgeItem] {
        &self.knowledge.knowledge_base
    }

    pub fn knowledge_gaps(&self) -> &[KnowledgeGap] {
        &self.knowledge.knowledge_gaps
    }

    pub fn resources(&self) -> &[LearningResource] {
        &self.knowledge.resources
    }

    pub fn loaded_at(&self) -> Timestamp {
        self.loaded_at
    }

    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }

    pub fn missing_skill_names(&self) -> Vec<String> {
        self.missing_skills.iter().map(|s| s.name.clone()).collect()
    }

    /// Flattens the context into the shape sent to the conversation
    /// collaborator.
    pub fn projection(&self) -> ContextProjection {
        ContextProjection {
            employee_id: self.employee.id.to_string(),
            name: self.employee.name.clone(),
            email: self.employee.email.clone(),
            position: self.employee.position.clone(),
            department: self.employee.department.clone(),
            skills: self.skill_names(),
            missing_skills: self.missing_skill_names(),
            courses: self
                .courses
                .iter()
                .map(|c| CourseProjection {
                    title: c.title.clone(),
                    progress: c.progress,
                    status: c.status.clone(),
                })
                .collect(),
            knowledge_base: self.knowledge.knowledge_base.clone(),
            knowledge_gaps: self.knowledge.knowledge_gaps.clone(),
            resources: self.knowledge.resources.clone(),
        }
    }
}

/// Wire projection of an [`EmployeeContext`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextProjection {
    pub employee_id: String,
    pub name: String,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub courses: Vec<CourseProjection>,
    pub knowledge_base: Vec<KnowledgeItem>,
    pub knowledge_gaps: Vec<KnowledgeGap>,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseProjection {
    pub title: String,
    pub progress: Percentage,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> EmployeeContext {
        EmployeeContext::new(
            EmployeeProfile {
                id: EmployeeId::new("emp-1").unwrap(),
                name: "Jane Doe".to_string(),
                email: Some("jane@example.com".to_string()),
                department: Some("Engineering".to_string()),
                position: Some("Data Analyst".to_string()),
            },
            vec![Skill::named("SQL"), Skill::named("Excel")],
            vec![MissingSkill::named("Python")],
            vec![],
            KnowledgeSnapshot::default(),
        )
    }

    #[test]
    fn exposes_skill_names_in_order() {
        assert_eq!(jane().skill_names(), vec!["SQL", "Excel"]);
        assert_eq!(jane().missing_skill_names(), vec!["Python"]);
    }

    #[test]
    fn projection_serializes_camel_case() {
        let json = serde_json::to_value(jane().projection()).unwrap();

        assert_eq!(json["employeeId"], "emp-1");
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["skills"], serde_json::json!(["SQL", "Excel"]));
        assert_eq!(json["missingSkills"], serde_json::json!(["Python"]));
        assert!(json["knowledgeBase"].as_array().unwrap().is_empty());
    }
}
