//! Shared HTTP client for every backend collaborator.
//!
//! Responses are read in three steps so failures stay distinguishable:
//! status check, JSON parse of the body, then decoding into a typed DTO.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::ports::ApiError;

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct BackendClientConfig {
    pub base_url: String,
    api_key: Option<Secret<String>>,
    pub timeout: Duration,
}

impl BackendClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the key sent as `apikey` and bearer token.
    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest wrapper with the backend's headers and error mapping.
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendClientConfig,
    client: Client,
}

impl BackendClient {
    pub fn new(config: BackendClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.config.base_url, path)
        } else {
            format!("{}/{}", self.config.base_url, path)
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => builder
                .header("apikey", key.expose_secret())
                .header("Authorization", format!("Bearer {}", key.expose_secret())),
            None => builder,
        }
    }

    /// POSTs a JSON body and returns the parsed JSON reply.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.authorize(self.client.post(self.url(path))).json(body);
        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        self.read_json(response).await
    }

    /// GETs a path with query parameters and returns the parsed JSON reply.
    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let request = self
            .authorize(self.client.get(self.url(path)))
            .header("Accept", "application/json")
            .query(query);
        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        self.read_json(response).await
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if err.is_connect() {
            ApiError::network(format!("Connection failed: {}", err))
        } else {
            ApiError::network(err.to_string())
        }
    }

    async fn read_json(&self, response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("failed to read body: {}", e)))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "backend returned error status");
            return Err(ApiError::status(status.as_u16(), error_message(&body)));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}

/// Decodes a parsed reply into a DTO.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::UnexpectedShape(e.to_string()))
}

/// Pulls an error string out of an error body, if it is JSON and has one.
fn error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| parsed.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = BackendClientConfig::new("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn url_joins_with_single_slash() {
        let client = BackendClient::new(BackendClientConfig::new("http://h")).unwrap();
        assert_eq!(client.url("/api/upload"), "http://h/api/upload");
        assert_eq!(client.url("api/upload"), "http://h/api/upload");
    }

    #[test]
    fn error_message_reads_error_then_message() {
        assert_eq!(error_message(r#"{"error":"bad title"}"#), Some("bad title".into()));
        assert_eq!(error_message(r#"{"message":"nope"}"#), Some("nope".into()));
        assert_eq!(error_message(r#"{"error":""}"#), None);
        assert_eq!(error_message("<html>"), None);
    }

    #[test]
    fn decode_reports_shape_errors() {
        #[derive(Debug, serde::Deserialize)]
        struct Dto {
            #[allow(dead_code)]
            id: String,
        }

        let err = decode::<Dto>(serde_json::json!({"id": 5})).unwrap_err();
        assert!(err.is_parse());
    }
}
