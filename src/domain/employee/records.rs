//! Employee profile records as delivered by the HR backend.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmployeeId, Percentage, Timestamp};

/// Employee profile with the position already joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: EmployeeId,
    pub name: String,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
}

/// A skill the employee has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Assessed proficiency, if the assessment graded it.
    pub proficiency: Option<Percentage>,
}

impl Skill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            proficiency: None,
        }
    }
}

/// A skill the employee's position requires but the employee lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub name: String,
    pub importance: Option<String>,
}

impl MissingSkill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            importance: None,
        }
    }
}

/// One skill-assessment snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub id: String,
    pub assessed_at: Timestamp,
    pub skills: Vec<Skill>,
    pub missing_skills: Vec<MissingSkill>,
}

impl SkillAssessment {
    /// Picks the most recent snapshot. Older snapshots are never merged in.
    pub fn latest(assessments: &[SkillAssessment]) -> Option<&SkillAssessment> {
        assessments.iter().max_by_key(|a| a.assessed_at)
    }
}

/// An enrollment as stored, before the course title is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub course_id: String,
    pub progress: Percentage,
    pub status: String,
}

/// Catalogue entry for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
}

/// An enrollment joined with its course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    pub course_id: String,
    pub title: String,
    pub progress: Percentage,
    pub status: String,
}

impl EnrolledCourse {
    /// Joins an enrollment with its course, or with a placeholder title when
    /// the course could not be resolved.
    pub fn join(enrollment: EnrollmentRecord, course: Option<CourseRecord>) -> Self {
        let title = match course {
            Some(course) => course.title,
            None => placeholder_course_title(&enrollment.course_id),
        };
        Self {
            course_id: enrollment.course_id,
            title,
            progress: enrollment.progress,
            status: enrollment.status,
        }
    }
}

/// Title used for an enrollment whose course cannot be resolved.
pub fn placeholder_course_title(course_id: &str) -> String {
    let short: String = course_id.chars().take(8).collect();
    format!("Course {}", short)
}

/// Knowledge-base entry relevant to the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub title: String,
    pub summary: String,
}

/// Topic where the employee's knowledge falls short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGap {
    pub topic: String,
    pub severity: Option<String>,
}

/// Recommended learning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub url: Option<String>,
    pub kind: Option<String>,
}

/// Auxiliary knowledge data for one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeSnapshot {
    pub knowledge_base: Vec<KnowledgeItem>,
    pub knowledge_gaps: Vec<KnowledgeGap>,
    pub resources: Vec<LearningResource>,
}
