//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Skill and record errors
//! - 2xx: Source errors
//! - 3xx: Config errors
//! - 4xx: Query and request errors
//! - 5xx: Upstream (completion service) errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine output.
///
/// Each variant maps to a numeric code (e.g., `SkillNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Skill errors (1xx)
    // ========================================
    /// E101: Requested skill is not in the catalog
    SkillNotFound,
    /// E102: Raw record has no usable name
    RecordInvalid,

    // ========================================
    // Source errors (2xx)
    // ========================================
    /// E201: Source document missing, unreadable or unparseable
    SourceUnavailable,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,
    /// E302: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Query errors (4xx)
    // ========================================
    /// E401: Request or query could not be interpreted
    BadRequest,
    /// E402: Search returned zero results
    SearchNoResults,

    // ========================================
    // Upstream errors (5xx)
    // ========================================
    /// E501: Completion service call failed
    UpstreamFailure,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Serialization/deserialization failed
    SerializationError,
    /// E902: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `SkillNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::SkillNotFound => 101,
            Self::RecordInvalid => 102,
            Self::SourceUnavailable => 201,
            Self::ConfigInvalid => 301,
            Self::ConfigMissingRequired => 302,
            Self::BadRequest => 401,
            Self::SearchNoResults => 402,
            Self::UpstreamFailure => 501,
            Self::SerializationError => 901,
            Self::IoError => 902,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::SkillNotFound => "Run `skillhub search <query>` to find similar skills, or `skillhub list` to see the catalog",
            Self::RecordInvalid => "Give every record in the source file a non-empty `name` or `slug` field",
            Self::SourceUnavailable => "Check that the source file exists under one of the configured base directories and is valid JSON",
            Self::ConfigInvalid => "Check TOML syntax in the config file and the SKILLHUB_* environment variables",
            Self::ConfigMissingRequired => "Set the required value in skillhub.toml or via its SKILLHUB_* environment variable",
            Self::BadRequest => "Check the request parameters. Valid browse filters: all, featured, trusted, grade-a",
            Self::SearchNoResults => "Try broader search terms, or run `skillhub list` to see all skills",
            Self::UpstreamFailure => "The completion service could not be reached. Check the chat endpoint and credential",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::SkillNotFound
            | Self::RecordInvalid
            | Self::SourceUnavailable
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::BadRequest
            | Self::SearchNoResults
            | Self::UpstreamFailure
            | Self::IoError => true,
            Self::SerializationError => false,
        }
    }

    /// Get the category name for this error code.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::SkillNotFound | Self::RecordInvalid => "skill",
            Self::SourceUnavailable => "source",
            Self::ConfigInvalid | Self::ConfigMissingRequired => "config",
            Self::BadRequest | Self::SearchNoResults => "query",
            Self::UpstreamFailure => "upstream",
            Self::SerializationError | Self::IoError => "internal",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::SkillNotFound,
            Self::RecordInvalid,
            Self::SourceUnavailable,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::BadRequest,
            Self::SearchNoResults,
            Self::UpstreamFailure,
            Self::SerializationError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
