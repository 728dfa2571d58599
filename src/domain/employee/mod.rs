//! Employee module - profile records and the aggregated EmployeeContext.

mod context;
mod records;

pub use context::{ContextProjection, CourseProjection, EmployeeContext};
pub use records::{
    placeholder_course_title, CourseRecord, EmployeeProfile, EnrolledCourse, EnrollmentRecord,
    KnowledgeGap, KnowledgeItem, KnowledgeSnapshot, LearningResource, MissingSkill, Skill,
    SkillAssessment,
};
