//! PostgREST-backed HR store.
//!
//! Implements `Directory` and `ProfileReader` against `/rest/v1/<table>`
//! with `select=` projections and `col=eq.value` filters. Nothing is cached.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::client::{decode, BackendClient};
use crate::domain::directory::{EmployeeSummary, GroupDimension, GroupSummary};
use crate::domain::employee::{
    CourseRecord, EmployeeProfile, EnrollmentRecord, MissingSkill, Skill, SkillAssessment,
};
use crate::domain::foundation::{EmployeeId, Percentage, Timestamp};
use crate::ports::{ApiError, Directory, ProfileReader};

const EMPLOYEES: &str = "hr_employees";
const DEPARTMENTS: &str = "hr_departments";
const POSITIONS: &str = "hr_positions";
const COURSES: &str = "hr_courses";
const ENROLLMENTS: &str = "hr_course_enrollments";
const ASSESSMENTS: &str = "hr_employee_skills_assessments";

const EMPLOYEE_SELECT: &str =
    "id,name,email,department:hr_departments(name),position:hr_positions(title)";

/// HR tables read through the REST surface.
pub struct HrRestStore {
    client: BackendClient,
    rest_path: String,
}

impl HrRestStore {
    pub fn new(client: BackendClient, rest_path: impl Into<String>) -> Self {
        Self {
            client,
            rest_path: rest_path.into().trim_end_matches('/').to_string(),
        }
    }

    async fn rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let path = format!("{}/{}", self.rest_path, table);
        let value = self.client.get_json(&path, query).await?;
        decode(value)
    }
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

#[async_trait]
impl Directory for HrRestStore {
    async fn list_employees(&self) -> Result<Vec<EmployeeSummary>, ApiError> {
        let rows: Vec<EmployeeRow> = self
            .rows(
                EMPLOYEES,
                &[
                    ("select", EMPLOYEE_SELECT.to_string()),
                    ("order", "name.asc".to_string()),
                ],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| EmployeeSummary {
                id: row.id,
                name: row.name,
                department: row.department.map(|d| d.name),
                position: row.position.map(|p| p.title),
            })
            .collect())
    }

    async fn list_groups(&self, dimension: GroupDimension) -> Result<Vec<GroupSummary>, ApiError> {
        // Aliases (`name:title`) do not apply to `order`, which names the column.
        let (table, select, order) = match dimension {
            GroupDimension::Department => (
                DEPARTMENTS,
                "id,name,members:hr_employees(count)",
                "name.asc",
            ),
            GroupDimension::Position => (
                POSITIONS,
                "id,name:title,members:hr_employees(count)",
                "title.asc",
            ),
            GroupDimension::Course => (
                COURSES,
                "id,name:title,members:hr_course_enrollments(count)",
                "title.asc",
            ),
        };

        let rows: Vec<GroupRow> = self
            .rows(
                table,
                &[("select", select.to_string()), ("order", order.to_string())],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let count = row.members.first().map(|m| m.count).unwrap_or(0);
                GroupSummary::new(row.id, row.name, count)
            })
            .collect())
    }
}

#[async_trait]
impl ProfileReader for HrRestStore {
    async fn employee(&self, id: &EmployeeId) -> Result<Option<EmployeeProfile>, ApiError> {
        let rows: Vec<EmployeeRow> = self
            .rows(
                EMPLOYEES,
                &[
                    ("select", EMPLOYEE_SELECT.to_string()),
                    ("id", eq(id.as_str())),
                ],
            )
            .await?;

        Ok(rows.into_iter().next().map(|row| EmployeeProfile {
            id: row.id,
            name: row.name,
            email: row.email,
            department: row.department.map(|d| d.name),
            position: row.position.map(|p| p.title),
        }))
    }

    async fn skill_assessments(&self, id: &EmployeeId) -> Result<Vec<SkillAssessment>, ApiError> {
        let rows: Vec<AssessmentRow> = self
            .rows(
                ASSESSMENTS,
                &[
                    ("select", "id,assessed_at,skills,missing_skills".to_string()),
                    ("employee_id", eq(id.as_str())),
                ],
            )
            .await?;

        Ok(rows.into_iter().map(AssessmentRow::into_assessment).collect())
    }

    async fn enrollments(&self, id: &EmployeeId) -> Result<Vec<EnrollmentRecord>, ApiError> {
        let rows: Vec<EnrollmentRow> = self
            .rows(
                ENROLLMENTS,
                &[
                    ("select", "course_id,progress,status".to_string()),
                    ("employee_id", eq(id.as_str())),
                ],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| EnrollmentRecord {
                course_id: row.course_id,
                progress: percent(row.progress),
                status: row.status.unwrap_or_else(|| "enrolled".to_string()),
            })
            .collect())
    }

    async fn course(&self, course_id: &str) -> Result<Option<CourseRecord>, ApiError> {
        let rows: Vec<CourseRecord> = self
            .rows(
                COURSES,
                &[("select", "id,title".to_string()), ("id", eq(course_id))],
            )
            .await?;

        Ok(rows.into_iter().next())
    }
}

fn percent(value: Option<f64>) -> Percentage {
    let clamped = value.unwrap_or(0.0).round().clamp(0.0, 100.0);
    Percentage::new(clamped as u8)
}

// ════════════════════════════════════════════════════════════════════════════════
// Row DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    id: EmployeeId,
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    department: Option<NameRef>,
    #[serde(default)]
    position: Option<TitleRef>,
}

#[derive(Debug, Deserialize)]
struct NameRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TitleRef {
    title: String,
}

#[derive(Debug, Deserialize)]
struct GroupRow {
    id: String,
    name: String,
    #[serde(default)]
    members: Vec<CountRow>,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u32,
}

#[derive(Debug, Deserialize)]
struct AssessmentRow {
    id: String,
    assessed_at: Timestamp,
    #[serde(default)]
    skills: Vec<SkillRow>,
    #[serde(default)]
    missing_skills: Vec<MissingSkillRow>,
}

impl AssessmentRow {
    fn into_assessment(self) -> SkillAssessment {
        SkillAssessment {
            id: self.id,
            assessed_at: self.assessed_at,
            skills: self
                .skills
                .into_iter()
                .map(|s| Skill {
                    name: s.name,
                    proficiency: s.proficiency.map(|p| percent(Some(p))),
                })
                .collect(),
            missing_skills: self
                .missing_skills
                .into_iter()
                .map(|s| MissingSkill {
                    name: s.name,
                    importance: s.importance,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SkillRow {
    name: String,
    #[serde(default)]
    proficiency: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MissingSkillRow {
    name: String,
    #[serde(default)]
    importance: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EnrollmentRow {
    course_id: String,
    #[serde(default)]
    progress: Option<f64>,
    #[serde(default)]
    status: Option<String>,
}
