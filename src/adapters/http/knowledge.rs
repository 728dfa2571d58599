//! HTTP knowledge source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::{decode, BackendClient};
use crate::domain::employee::{KnowledgeGap, KnowledgeItem, KnowledgeSnapshot, LearningResource};
use crate::domain::foundation::EmployeeId;
use crate::ports::{ApiError, KnowledgeSource};

pub struct HttpKnowledgeSource {
    client: BackendClient,
    path: String,
}

impl HttpKnowledgeSource {
    pub fn new(client: BackendClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KnowledgeQuery<'a> {
    employee_id: &'a EmployeeId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KnowledgeReply {
    #[serde(default)]
    knowledge_base: Vec<KnowledgeItem>,
    #[serde(default)]
    knowledge_gaps: Vec<KnowledgeGap>,
    #[serde(default)]
    resources: Vec<LearningResource>,
}

#[async_trait]
impl KnowledgeSource for HttpKnowledgeSource {
    async fn snapshot(&self, employee_id: &EmployeeId) -> Result<KnowledgeSnapshot, ApiError> {
        let query = KnowledgeQuery { employee_id };
        let value = self.client.post_json(&self.path, &query).await?;
        let reply: KnowledgeReply = decode(value)?;

        Ok(KnowledgeSnapshot {
            knowledge_base: reply.knowledge_base,
            knowledge_gaps: reply.knowledge_gaps,
            resources: reply.resources,
        })
    }
}
