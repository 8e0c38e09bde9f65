use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::config::Config;
use crate::core::skill::InstallTemplate;
use crate::registry::{Normalizer, Registry, SourceLoader};

/// Isolated source directory tree for registry tests.
///
/// The first base dir is `<tmp>/primary`, the second `<tmp>/fallback`; both
/// are created empty.
pub struct SourceDirFixture {
    pub temp_dir: TempDir,
    pub primary: PathBuf,
    pub fallback: PathBuf,
}

impl SourceDirFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let primary = temp_dir.path().join("primary");
        let fallback = temp_dir.path().join("fallback");
        std::fs::create_dir_all(&primary).expect("Failed to create primary dir");
        std::fs::create_dir_all(&fallback).expect("Failed to create fallback dir");
        Self {
            temp_dir,
            primary,
            fallback,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn base_dirs(&self) -> Vec<PathBuf> {
        vec![self.primary.clone(), self.fallback.clone()]
    }

    /// Write a JSON document into the primary dir.
    pub fn write_source(&self, file: &str, document: &Value) -> PathBuf {
        Self::write_json(&self.primary, file, document)
    }

    /// Write a JSON document into the fallback dir.
    pub fn write_fallback(&self, file: &str, document: &Value) -> PathBuf {
        Self::write_json(&self.fallback, file, document)
    }

    /// Write raw bytes, for malformed documents.
    pub fn write_raw(&self, file: &str, content: &str) -> PathBuf {
        let path = self.primary.join(file);
        std::fs::write(&path, content).expect("Failed to write source file");
        path
    }

    /// Default config pointed at this tree.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.sources.base_dirs = self.base_dirs();
        config
    }

    pub fn loader(&self) -> SourceLoader {
        SourceLoader::from_config(&self.config().sources, self.root())
    }

    pub fn registry(&self) -> Registry {
        Registry::new(self.loader(), Normalizer::new(InstallTemplate::default()))
    }

    fn write_json(dir: &Path, file: &str, document: &Value) -> PathBuf {
        let path = dir.join(file);
        let body = serde_json::to_string_pretty(document).expect("Failed to encode source");
        std::fs::write(&path, body).expect("Failed to write source file");
        path
    }
}

impl Default for SourceDirFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal raw record: name and description.
pub fn record(name: &str, description: &str) -> Value {
    json!({ "name": name, "description": description })
}

/// Raw record with grade, tier and composite score.
pub fn scored_record(name: &str, grade: &str, tier: &str, composite: f64) -> Value {
    json!({
        "name": name,
        "description": format!("{name} skill"),
        "grade": grade,
        "tier": tier,
        "composite_score": composite,
    })
}
