//! Canonical skill entry and its scalar types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Grade assigned when a record carries none.
pub const DEFAULT_GRADE: &str = "B";
/// Tier assigned when a record carries none.
pub const DEFAULT_TIER: &str = "community";
/// Safety score assigned when neither `safety_score` nor `score` is usable.
pub const DEFAULT_SAFETY_SCORE: f64 = 75.0;
/// Composite score assigned when `composite_score` is not usable.
pub const DEFAULT_COMPOSITE_SCORE: f64 = 70.0;
/// Installer used by the install-command template.
pub const DEFAULT_INSTALL_TOOL: &str = "clawhub";

/// One catalog entry, fully populated after normalization.
///
/// `category` holds only an explicit override carried by the source record;
/// the effective category comes from [`crate::core::category::category_of`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Identity key: trimmed, non-empty, case-sensitive
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub grade: String,
    pub tier: String,
    pub safety_score: Score,
    pub composite_score: Score,
    pub install_cmd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_summary: Option<String>,
}

impl Skill {
    /// Build a skill carrying every default, as a record with only a name would.
    #[must_use]
    pub fn with_defaults(name: impl Into<String>, install: &InstallTemplate) -> Self {
        let name = name.into();
        Self {
            install_cmd: install.render(&name),
            name,
            description: None,
            category: None,
            grade: DEFAULT_GRADE.to_string(),
            tier: DEFAULT_TIER.to_string(),
            safety_score: Score::new(DEFAULT_SAFETY_SCORE),
            composite_score: Score::new(DEFAULT_COMPOSITE_SCORE),
            usage_summary: None,
        }
    }

    /// Description text, or the empty string.
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Numeric score that serializes as an integer when it has no fractional part.
///
/// Non-finite values never come out of normalization; [`Score::value`] still
/// reads them as zero so ordering stays total.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Score(f64);

impl Score {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        if self.0.is_finite() { self.0 } else { 0.0 }
    }

    fn as_integer(self) -> Option<i64> {
        let v = self.value();
        #[allow(clippy::cast_possible_truncation)]
        (v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0).then_some(v as i64)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(i) => write!(f, "{i}"),
            None => write!(f, "{}", self.value()),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.value()),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}

/// Deterministic `"<tool> install <name>"` command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTemplate {
    tool: String,
}

impl InstallTemplate {
    #[must_use]
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }

    #[must_use]
    pub fn render(&self, name: &str) -> String {
        format!("{} install {name}", self.tool)
    }
}

impl Default for InstallTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALL_TOOL)
    }
}
