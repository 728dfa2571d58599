//! In-memory profile store.
//!
//! Implements `ProfileReader` and `KnowledgeSource` for one or more
//! employees, with per-source failure injection.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::employee::{
    CourseRecord, EmployeeProfile, EnrollmentRecord, KnowledgeSnapshot, SkillAssessment,
};
use crate::domain::foundation::EmployeeId;
use crate::ports::{ApiError, KnowledgeSource, ProfileReader};

#[derive(Debug, Default)]
struct Tables {
    employees: HashMap<EmployeeId, EmployeeProfile>,
    assessments: HashMap<EmployeeId, Vec<SkillAssessment>>,
    enrollments: HashMap<EmployeeId, Vec<EnrollmentRecord>>,
    courses: HashMap<String, CourseRecord>,
    knowledge: HashMap<EmployeeId, KnowledgeSnapshot>,
    failing_courses: Vec<String>,
    knowledge_failure: Option<ApiError>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    tables: Arc<Mutex<Tables>>,
    reads: Arc<Mutex<usize>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(self, profile: EmployeeProfile) -> Self {
        self.tables
            .lock()
            .unwrap()
            .employees
            .insert(profile.id.clone(), profile);
        self
    }

    pub fn with_assessment(self, employee: &EmployeeId, assessment: SkillAssessment) -> Self {
        self.tables
            .lock()
            .unwrap()
            .assessments
            .entry(employee.clone())
            .or_default()
            .push(assessment);
        self
    }

    pub fn with_enrollment(self, employee: &EmployeeId, enrollment: EnrollmentRecord) -> Self {
        self.tables
            .lock()
            .unwrap()
            .enrollments
            .entry(employee.clone())
            .or_default()
            .push(enrollment);
        self
    }

    pub fn with_course(self, id: &str, title: &str) -> Self {
        self.tables.lock().unwrap().courses.insert(
            id.to_string(),
            CourseRecord {
                id: id.to_string(),
                title: title.to_string(),
            },
        );
        self
    }

    /// Makes the lookup of one course fail.
    pub fn with_failing_course(self, id: &str) -> Self {
        self.tables.lock().unwrap().failing_courses.push(id.to_string());
        self
    }

    pub fn with_knowledge(self, employee: &EmployeeId, snapshot: KnowledgeSnapshot) -> Self {
        self.tables
            .lock()
            .unwrap()
            .knowledge
            .insert(employee.clone(), snapshot);
        self
    }

    pub fn with_knowledge_failure(self, error: ApiError) -> Self {
        self.tables.lock().unwrap().knowledge_failure = Some(error);
        self
    }

    /// Number of reads served across all tables.
    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }

    fn count_read(&self) {
        *self.reads.lock().unwrap() += 1;
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileStore {
    async fn employee(&self, id: &EmployeeId) -> Result<Option<EmployeeProfile>, ApiError> {
        self.count_read();
        Ok(self.tables.lock().unwrap().employees.get(id).cloned())
    }

    async fn skill_assessments(&self, id: &EmployeeId) -> Result<Vec<SkillAssessment>, ApiError> {
        self.count_read();
        Ok(self
            .tables
            .lock()
            .unwrap()
            .assessments
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    async fn enrollments(&self, id: &EmployeeId) -> Result<Vec<EnrollmentRecord>, ApiError> {
        self.count_read();
        Ok(self
            .tables
            .lock()
            .unwrap()
            .enrollments
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    async fn course(&self, course_id: &str) -> Result<Option<CourseRecord>, ApiError> {
        self.count_read();
        let tables = self.tables.lock().unwrap();
        if tables.failing_courses.iter().any(|id| id == course_id) {
            return Err(ApiError::status(500, Some("course lookup failed".to_string())));
        }
        Ok(tables.courses.get(course_id).cloned())
    }
}

#[async_trait]
impl KnowledgeSource for InMemoryProfileStore {
    async fn snapshot(&self, employee_id: &EmployeeId) -> Result<KnowledgeSnapshot, ApiError> {
        self.count_read();
        let tables = self.tables.lock().unwrap();
        if let Some(error) = &tables.knowledge_failure {
            return Err(error.clone());
        }
        Ok(tables
            .knowledge
            .get(employee_id)
            .cloned()
            .unwrap_or_default())
    }
}
