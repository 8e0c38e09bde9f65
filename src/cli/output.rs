use chrono::{DateTime, Utc};
use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::error::{ErrorCode, HubError, Result, StructuredError};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Newline-delimited JSON (one object per line)
    Jsonl,
    /// Plain text without colors or formatting
    Plain,
    /// Tab-separated values (for shell scripting)
    Tsv,
}

impl OutputFormat {
    /// Explicit format wins; `--machine` alone means JSON.
    #[must_use]
    pub fn from_args(machine: bool, format: Option<Self>) -> Self {
        match (format, machine) {
            (Some(format), _) => format,
            (None, true) => Self::Json,
            (None, false) => Self::Human,
        }
    }

    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json | Self::Jsonl | Self::Tsv)
    }
}

/// Envelope for `--output-format json` responses.
#[derive(Serialize)]
pub struct MachineResponse<T> {
    pub status: MachineStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    Ok,
    Error {
        code: ErrorCode,
        numeric_code: u16,
        message: String,
        suggestion: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<serde_json::Value>,
        recoverable: bool,
        category: String,
    },
}

impl From<StructuredError> for MachineStatus {
    fn from(err: StructuredError) -> Self {
        Self::Error {
            code: err.code,
            numeric_code: err.numeric_code,
            message: err.message,
            suggestion: err.suggestion,
            context: err.context,
            recoverable: err.recoverable,
            category: err.category,
        }
    }
}

pub fn machine_ok<T: Serialize>(data: T) -> MachineResponse<T> {
    MachineResponse {
        status: MachineStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

impl<T> MachineResponse<T> {
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

/// Error envelope carrying the structured form of `err`.
pub fn machine_error(err: StructuredError) -> MachineResponse<serde_json::Value> {
    MachineResponse {
        status: err.into(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

pub fn machine_error_from(err: &HubError) -> MachineResponse<serde_json::Value> {
    machine_error(err.to_structured())
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| HubError::Serialization(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

/// One JSON object per line.
pub fn emit_jsonl<T: Serialize>(items: &[T]) -> Result<()> {
    for item in items {
        let json = serde_json::to_string(item)
            .map_err(|e| HubError::Serialization(format!("serialize output: {e}")))?;
        println!("{json}");
    }
    Ok(())
}

/// Header row then one tab-separated row per item.
pub fn emit_tsv<T, F>(headers: &[&str], items: &[T], row_fn: F)
where
    F: Fn(&T) -> Vec<String>,
{
    println!("{}", headers.join("\t"));
    for item in items {
        println!("{}", row_fn(item).join("\t"));
    }
}

/// Replace tabs and newlines so a value fits one TSV cell.
#[must_use]
pub fn tsv_cell(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
    colors: bool,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 16,
            colors: true,
        }
    }

    /// Layout without ANSI styling.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 16,
            colors: false,
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.colors { style(text).bold().to_string() } else { text.to_string() }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        let line = self.bold(text);
        self.lines.push(line);
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        let line = self.bold(text);
        self.lines.push(line);
        self.lines.push("-".repeat(text.chars().count().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let padded = format!("{key:width$}", width = self.key_width);
        let key = if self.colors { style(padded).dim().to_string() } else { padded };
        self.lines.push(format!("{key} {value}"));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}
