//! Raw record normalization
//!
//! Every canonical field is filled from an ordered list of raw field names
//! and a default. Scalars are coerced; nulls and wrong-typed values fall
//! through to the next field. Rules marked `blank_falls_through` also skip
//! empty and whitespace-only strings.

use serde_json::{Map, Value};

use crate::core::skill::{
    DEFAULT_COMPOSITE_SCORE, DEFAULT_GRADE, DEFAULT_SAFETY_SCORE, DEFAULT_TIER, InstallTemplate,
    Score, Skill,
};
use crate::error::{HubError, Result};

/// Extraction rule for a text field.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub fields: &'static [&'static str],
    pub blank_falls_through: bool,
}

/// Extraction rule for a numeric score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRule {
    pub fields: &'static [&'static str],
    pub default: f64,
}

pub const NAME: TextRule = TextRule {
    fields: &["name", "slug"],
    blank_falls_through: false,
};
pub const DESCRIPTION: TextRule = TextRule {
    fields: &["description", "summary"],
    blank_falls_through: false,
};
pub const CATEGORY: TextRule = TextRule {
    fields: &["category"],
    blank_falls_through: true,
};
pub const GRADE: TextRule = TextRule {
    fields: &["grade"],
    blank_falls_through: true,
};
pub const TIER: TextRule = TextRule {
    fields: &["tier"],
    blank_falls_through: true,
};
pub const INSTALL_CMD: TextRule = TextRule {
    fields: &["install_cmd"],
    blank_falls_through: true,
};
pub const USAGE_SUMMARY: TextRule = TextRule {
    fields: &["usage_summary"],
    blank_falls_through: false,
};
/// `score` is the legacy name of `safety_score`.
pub const SAFETY_SCORE: ScoreRule = ScoreRule {
    fields: &["safety_score", "score"],
    default: DEFAULT_SAFETY_SCORE,
};
pub const COMPOSITE_SCORE: ScoreRule = ScoreRule {
    fields: &["composite_score"],
    default: DEFAULT_COMPOSITE_SCORE,
};

impl TextRule {
    /// First usable value, untrimmed.
    pub fn extract(&self, record: &Map<String, Value>) -> Option<String> {
        self.fields.iter().find_map(|field| {
            let text = scalar_text(record.get(*field)?)?;
            if self.blank_falls_through && text.trim().is_empty() {
                None
            } else {
                Some(text)
            }
        })
    }
}

impl ScoreRule {
    pub fn extract(&self, record: &Map<String, Value>) -> Score {
        let value = self
            .fields
            .iter()
            .find_map(|field| scalar_number(record.get(*field)?))
            .unwrap_or(self.default);
        Score::new(value)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn scalar_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Maps raw records into canonical [`Skill`]s.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    install: InstallTemplate,
}

impl Normalizer {
    pub fn new(install: InstallTemplate) -> Self {
        Self { install }
    }

    pub fn install_template(&self) -> &InstallTemplate {
        &self.install
    }

    /// Normalize one raw record.
    ///
    /// Fails with [`HubError::InvalidRecord`] when the record is not an object
    /// or carries no usable name.
    pub fn normalize(&self, raw: &Value) -> Result<Skill> {
        let Value::Object(record) = raw else {
            return Err(HubError::InvalidRecord("record is not a JSON object".to_string()));
        };

        let name = NAME
            .extract(record)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| HubError::InvalidRecord("record has no name or slug".to_string()))?;

        let install_cmd = INSTALL_CMD
            .extract(record)
            .unwrap_or_else(|| self.install.render(&name));

        Ok(Skill {
            description: non_blank(DESCRIPTION.extract(record)),
            category: CATEGORY.extract(record),
            grade: GRADE.extract(record).unwrap_or_else(|| DEFAULT_GRADE.to_string()),
            tier: TIER.extract(record).unwrap_or_else(|| DEFAULT_TIER.to_string()),
            safety_score: SAFETY_SCORE.extract(record),
            composite_score: COMPOSITE_SCORE.extract(record),
            install_cmd,
            usage_summary: non_blank(USAGE_SUMMARY.extract(record)),
            name,
        })
    }
}
