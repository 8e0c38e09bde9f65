//! Completion service client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::chat::ApiKey;
use crate::error::{HubError, Result};

/// One chat-completions message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// Outbound completion call.
///
/// `Ok(None)` means the service answered but carried no usable reply text.
/// `Err` is reserved for transport failures and unparseable bodies.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, key: &ApiKey, request: &CompletionRequest) -> Result<Option<String>>;
}

/// `choices[0].message.content` when it is a non-empty string.
#[must_use]
pub fn extract_reply(body: &Value) -> Option<String> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}

/// OpenAI-compatible chat-completions client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, key: &ApiKey, request: &CompletionRequest) -> Result<Option<String>> {
        debug!(endpoint = %self.endpoint, model = %request.model, "Sending completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(key.expose())
            .json(request)
            .send()
            .await
            .map_err(|err| HubError::UpstreamFailure(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Completion endpoint returned non-success status");
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| HubError::UpstreamFailure(format!("invalid response body: {err}")))?;

        Ok(extract_reply(&body))
    }
}
