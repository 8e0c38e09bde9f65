//! Error handling for skillhub.
//!
//! This module provides:
//! - [`HubError`]: The main error enum for all skillhub operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context
//! - Suggestion helpers for context-aware error recovery hints

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::{suggest_for_error, suggest_similar_skills};

/// Main error type for skillhub operations.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown skill name, with close matches from the catalog
    #[error("Skill not found: {name}")]
    SkillNotFound { name: String, similar: Vec<String> },

    /// Raw record without an extractable name. Dropped by the merger.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Source document missing, unreadable or unparseable. Recovered by the
    /// loader as an empty contribution.
    #[error("Source {source_name} unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Upstream completion failed: {0}")]
    UpstreamFailure(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HubError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Serialization(_) => ErrorCode::SerializationError,
            Self::SkillNotFound { .. } => ErrorCode::SkillNotFound,
            Self::InvalidRecord(_) => ErrorCode::RecordInvalid,
            Self::SourceUnavailable { .. } => ErrorCode::SourceUnavailable,
            Self::UpstreamFailure(_) => ErrorCode::UpstreamFailure,
            Self::BadRequest(_) => ErrorCode::BadRequest,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::SkillNotFound { name, similar } => {
                Some(serde_json::json!({ "skill": name, "similar": similar }))
            }
            Self::SourceUnavailable {
                source_name,
                reason,
            } => Some(serde_json::json!({ "source": source_name, "reason": reason })),
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_hub_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "SKILL_NOT_FOUND")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "skill", "config", "upstream")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from a [`HubError`].
    #[must_use]
    pub fn from_hub_error(err: &HubError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error, regenerating the suggestion.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self.suggestion = suggest_for_error(self.code, self.context.as_ref());
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&HubError> for StructuredError {
    fn from(err: &HubError) -> Self {
        Self::from_hub_error(err)
    }
}

/// Result type alias using [`HubError`].
pub type Result<T> = std::result::Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_error_code_mapping() {
        assert_eq!(
            HubError::SkillNotFound {
                name: "x".into(),
                similar: Vec::new()
            }
            .code(),
            ErrorCode::SkillNotFound
        );
        assert_eq!(
            HubError::InvalidRecord("no name".into()).code(),
            ErrorCode::RecordInvalid
        );
        assert_eq!(
            HubError::SourceUnavailable {
                source_name: "registry.json".into(),
                reason: "missing".into()
            }
            .code(),
            ErrorCode::SourceUnavailable
        );
        assert_eq!(
            HubError::UpstreamFailure("timeout".into()).code(),
            ErrorCode::UpstreamFailure
        );
    }

    #[test]
    fn test_structured_error_from_hub_error() {
        let err = HubError::SkillNotFound {
            name: "weather-api".into(),
            similar: Vec::new(),
        };
        let structured = err.to_structured();

        assert_eq!(structured.code, ErrorCode::SkillNotFound);
        assert_eq!(structured.numeric_code, 101);
        assert!(structured.message.contains("weather-api"));
        assert!(structured.suggestion.contains("weather-api"));
        assert!(structured.recoverable);
        assert_eq!(structured.category, "skill");
    }

    #[test]
    fn test_skill_not_found_carries_similar_names() {
        let err = HubError::SkillNotFound {
            name: "wether-api".into(),
            similar: vec!["weather-api".into()],
        };
        let structured = err.to_structured();

        assert_eq!(
            structured.context,
            Some(serde_json::json!({ "skill": "wether-api", "similar": ["weather-api"] }))
        );
        assert!(structured.suggestion.contains("Did you mean: weather-api?"));
        assert_eq!(err.to_string(), "Skill not found: wether-api");
    }

    #[test]
    fn test_structured_error_with_context_regenerates_suggestion() {
        let err = StructuredError::new(ErrorCode::SkillNotFound, "not found")
            .with_context(serde_json::json!({ "skill": "wether", "similar": ["weather-api"] }));
        assert!(err.suggestion.contains("weather-api"));
    }

    #[test]
    fn test_structured_error_serialization() {
        let err = StructuredError::new(ErrorCode::BadRequest, "unknown filter");
        let json = serde_json::to_string(&err).unwrap();

        assert!(json.contains("BAD_REQUEST"));
        assert!(json.contains("\"numeric_code\":401"));
        assert!(json.contains("\"category\":\"query\""));
    }

    #[test]
    fn test_structured_error_display() {
        let err = StructuredError::new(ErrorCode::SkillNotFound, "Skill 'x' not found");
        assert_eq!(format!("{err}"), "[E101] Skill 'x' not found");
    }
}
