//! EmployeeContextLoader - assembles the read-only employee profile bundle.

use std::sync::Arc;

use tracing::instrument;

use super::error::ContextError;
use crate::domain::employee::{EmployeeContext, EnrolledCourse, KnowledgeSnapshot, SkillAssessment};
use crate::domain::foundation::EmployeeId;
use crate::ports::{KnowledgeSource, ProfileReader};

pub struct EmployeeContextLoader {
    profiles: Arc<dyn ProfileReader>,
    knowledge: Arc<dyn KnowledgeSource>,
}

impl EmployeeContextLoader {
    pub fn new(profiles: Arc<dyn ProfileReader>, knowledge: Arc<dyn KnowledgeSource>) -> Self {
        Self {
            profiles,
            knowledge,
        }
    }

    /// Loads profile, newest skill assessment, enrollments and knowledge.
    ///
    /// Unresolvable courses get a placeholder title. A failing knowledge
    /// source yields empty knowledge lists instead of an error.
    #[instrument(skip_all, fields(employee_id = %employee_id))]
    pub async fn load(&self, employee_id: &EmployeeId) -> Result<EmployeeContext, ContextError> {
        let employee = self
            .profiles
            .employee(employee_id)
            .await?
            .ok_or_else(|| ContextError::EmployeeNotFound(employee_id.clone()))?;

        let (assessments, enrollments, knowledge) = tokio::join!(
            self.profiles.skill_assessments(employee_id),
            self.profiles.enrollments(employee_id),
            self.knowledge.snapshot(employee_id),
        );
        let assessments = assessments?;
        let enrollments = enrollments?;

        let knowledge = knowledge.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "knowledge source unavailable, continuing without it");
            KnowledgeSnapshot::default()
        });

        let (skills, missing_skills) = match SkillAssessment::latest(&assessments) {
            Some(latest) => (latest.skills.clone(), latest.missing_skills.clone()),
            None => (Vec::new(), Vec::new()),
        };

        let mut courses = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let course = match self.profiles.course(&enrollment.course_id).await {
                Ok(course) => course,
                Err(err) => {
                    tracing::debug!(
                        course_id = %enrollment.course_id,
                        error = %err,
                        "course lookup failed, using placeholder title"
                    );
                    None
                }
            };
            courses.push(EnrolledCourse::join(enrollment, course));
        }

        tracing::info!(
            skills = skills.len(),
            missing_skills = missing_skills.len(),
            courses = courses.len(),
            "employee context loaded"
        );

        Ok(EmployeeContext::new(
            employee,
            skills,
            missing_skills,
            courses,
            knowledge,
        ))
    }
}
