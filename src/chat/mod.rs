//! Skill recommendation chat
//!
//! One turn: render the caller's skill list into a context slice, wrap it in
//! a system prompt and forward it with the user's message to the completion
//! service. Without a credential the turn answers with a fixed notice and
//! never touches the network.

pub mod client;
pub mod context;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use client::{ChatMessage, CompletionClient, CompletionRequest, OpenAiClient, extract_reply};
pub use context::{ContextEntry, NO_SKILLS_LOADED, build_context_slice, system_prompt};

use crate::config::ChatConfig;
use crate::core::skill::InstallTemplate;
use crate::error::{HubError, Result};

/// Reply used when the service answers without usable text.
pub const FALLBACK_REPLY: &str = "Sorry, I could not generate a response.";

/// Completion service credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a credential; blank values count as absent.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() { None } else { Some(Self(value)) }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Inbound chat body: `{ message, skills }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub skills: Option<Vec<ContextEntry>>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, skills: Vec<ContextEntry>) -> Self {
        Self {
            message: message.into(),
            skills: Some(skills),
        }
    }

    /// Parse a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|err| HubError::BadRequest(format!("invalid chat request: {err}")))
    }

    pub fn entries(&self) -> &[ContextEntry] {
        self.skills.as_deref().unwrap_or_default()
    }
}

/// Outbound chat body, used for success and failure alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into() }
    }

    pub fn error(err: &HubError) -> Self {
        Self::new(format!("Error: {err}"))
    }
}

pub struct ChatService {
    client: Arc<dyn CompletionClient>,
    api_key: Option<ApiKey>,
    settings: ChatConfig,
    install: InstallTemplate,
}

impl ChatService {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        api_key: Option<ApiKey>,
        settings: ChatConfig,
        install: InstallTemplate,
    ) -> Self {
        Self {
            client,
            api_key,
            settings,
            install,
        }
    }

    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Notice returned when no credential is configured.
    pub fn missing_key_notice(&self) -> String {
        format!(
            "Chat API key not configured. Set {}. Meanwhile: browse skills above and use '{} install <skill-name>' to install.",
            self.settings.api_key_env,
            self.install.tool()
        )
    }

    /// Completion request for one turn.
    pub fn build_request(&self, request: &ChatRequest) -> CompletionRequest {
        let limit = self.settings.context_limit;
        let slice = build_context_slice(request.entries(), limit, &self.install);
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt(&slice, limit, &self.install)),
                ChatMessage::user(request.message.clone()),
            ],
            max_tokens: self.settings.max_tokens,
        }
    }

    /// Answer one chat turn.
    ///
    /// Fails only with [`HubError::UpstreamFailure`] when the service cannot
    /// be reached or its body cannot be parsed.
    pub async fn reply(&self, request: &ChatRequest) -> Result<String> {
        let Some(key) = &self.api_key else {
            info!("Chat credential not configured; returning notice");
            return Ok(self.missing_key_notice());
        };

        let completion = self.build_request(request);
        match self.client.complete(key, &completion).await {
            Ok(Some(reply)) => Ok(reply),
            Ok(None) => {
                warn!("Completion response carried no reply text");
                Ok(FALLBACK_REPLY.to_string())
            }
            Err(err) => {
                warn!(error = %err, "Completion call failed");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for ChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService")
            .field("api_key", &self.api_key)
            .field("settings", &self.settings)
            .field("install", &self.install)
            .finish_non_exhaustive()
    }
}
