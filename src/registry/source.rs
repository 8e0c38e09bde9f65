//! Source document loading
//!
//! Each named source is looked up under every candidate base directory in
//! order. The first location where the file reads and parses as JSON is
//! where the source is found. Missing, unreadable and corrupt documents
//! contribute nothing; a parsed document whose top level is not an array
//! is found but empty.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SourcesConfig;
use crate::error::{HubError, Result};

/// Raw records read from one named source.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSource {
    pub name: String,
    /// Path the source was read from, if any location succeeded
    pub location: Option<PathBuf>,
    pub records: Vec<Value>,
}

impl LoadedSource {
    fn missing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: None,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.location.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct SourceLoader {
    files: Vec<String>,
    base_dirs: Vec<PathBuf>,
}

impl SourceLoader {
    pub fn new(files: Vec<String>, base_dirs: Vec<PathBuf>) -> Self {
        Self { files, base_dirs }
    }

    /// Loader for the configured sources, relative dirs resolved against `root`.
    pub fn from_config(config: &SourcesConfig, root: &Path) -> Self {
        Self::new(config.files.clone(), config.resolved_base_dirs(root))
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn base_dirs(&self) -> &[PathBuf] {
        &self.base_dirs
    }

    /// Load every source in precedence order. Never fails.
    pub fn load(&self) -> Vec<LoadedSource> {
        self.files.iter().map(|name| self.load_source(name)).collect()
    }

    fn load_source(&self, name: &str) -> LoadedSource {
        for dir in &self.base_dirs {
            let path = dir.join(name);
            match read_document(name, &path) {
                Ok(document) => {
                    let records = match document {
                        Value::Array(items) => items,
                        other => {
                            warn!(
                                source = name,
                                path = %path.display(),
                                kind = json_kind(&other),
                                "Source is not a JSON array; treating as empty"
                            );
                            Vec::new()
                        }
                    };
                    debug!(source = name, path = %path.display(), records = records.len(), "Source found");
                    return LoadedSource {
                        name: name.to_string(),
                        location: Some(path),
                        records,
                    };
                }
                Err(err) => {
                    debug!(source = name, path = %path.display(), error = %err, "Source read failed");
                }
            }
        }
        debug!(source = name, "Source not found in any base directory");
        LoadedSource::missing(name)
    }
}

fn read_document(name: &str, path: &Path) -> Result<Value> {
    let unavailable = |reason: String| HubError::SourceUnavailable {
        source_name: name.to_string(),
        reason,
    };

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(unavailable(format!("{} does not exist", path.display())));
        }
        Err(err) => {
            warn!(source = name, path = %path.display(), error = %err, "Source unreadable");
            return Err(unavailable(format!("read {}: {err}", path.display())));
        }
    };

    serde_json::from_str(&raw).map_err(|err| {
        warn!(source = name, path = %path.display(), error = %err, "Source is not valid JSON");
        unavailable(format!("parse {}: {err}", path.display()))
    })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
