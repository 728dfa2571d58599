//! Simulated knowledge source.
//!
//! Stands in for a knowledge-base backend that is not deployed. Returns the
//! same shared company material for every employee and no gaps.

use async_trait::async_trait;

use crate::domain::employee::{KnowledgeItem, KnowledgeSnapshot, LearningResource};
use crate::domain::foundation::EmployeeId;
use crate::ports::{ApiError, KnowledgeSource};

#[derive(Debug, Clone, Default)]
pub struct SimulatedKnowledgeSource;

impl SimulatedKnowledgeSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KnowledgeSource for SimulatedKnowledgeSource {
    async fn snapshot(&self, employee_id: &EmployeeId) -> Result<KnowledgeSnapshot, ApiError> {
        tracing::debug!(employee_id = %employee_id, "serving simulated knowledge snapshot");

        Ok(KnowledgeSnapshot {
            knowledge_base: vec![
                KnowledgeItem {
                    title: "Company learning handbook".to_string(),
                    summary: "How courses are assigned, tracked and completed.".to_string(),
                },
                KnowledgeItem {
                    title: "Role competency framework".to_string(),
                    summary: "Skills expected for each position and level.".to_string(),
                },
            ],
            knowledge_gaps: Vec::new(),
            resources: vec![LearningResource {
                title: "Internal course catalogue".to_string(),
                url: None,
                kind: Some("catalogue".to_string()),
            }],
        })
    }
}
