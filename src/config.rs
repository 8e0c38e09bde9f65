use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HubError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SKILLHUB_CONFIG";
/// Project config file name, resolved against the working directory.
pub const PROJECT_CONFIG_FILE: &str = "skillhub.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub install: InstallConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Layer defaults, the global file, the project file (or an explicit
    /// path) and `SKILLHUB_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        Self::load_with_env(explicit_path, project_root, &|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with a caller-supplied environment.
    pub fn load_with_env(
        explicit_path: Option<&Path>,
        project_root: &Path,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                HubError::Config(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides_from(env)?;
        config.validate()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("skillhub/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| HubError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| HubError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.sources {
            self.sources.merge(patch);
        }
        if let Some(patch) = patch.install {
            self.install.merge(patch);
        }
        if let Some(patch) = patch.chat {
            self.chat.merge(patch);
        }
        if let Some(patch) = patch.server {
            self.server.merge(patch);
        }
    }

    fn apply_env_overrides_from(&mut self, env: &dyn Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(values) = env_list(env, "SKILLHUB_SOURCES_FILES") {
            self.sources.files = values;
        }
        if let Some(values) = env_list(env, "SKILLHUB_SOURCES_BASE_DIRS") {
            self.sources.base_dirs = values.into_iter().map(PathBuf::from).collect();
        }

        if let Some(value) = env_string(env, "SKILLHUB_INSTALL_TOOL") {
            self.install.tool = value;
        }

        if let Some(value) = env_string(env, "SKILLHUB_CHAT_ENDPOINT") {
            self.chat.endpoint = value;
        }
        if let Some(value) = env_string(env, "SKILLHUB_CHAT_MODEL") {
            self.chat.model = value;
        }
        if let Some(value) = env_u32(env, "SKILLHUB_CHAT_MAX_TOKENS")? {
            self.chat.max_tokens = value;
        }
        if let Some(value) = env_string(env, "SKILLHUB_CHAT_API_KEY_ENV") {
            self.chat.api_key_env = value;
        }
        if let Some(value) = env_u32(env, "SKILLHUB_CHAT_CONTEXT_LIMIT")? {
            self.chat.context_limit = value as usize;
        }

        if let Some(value) = env_string(env, "SKILLHUB_SERVER_BIND") {
            self.server.bind = value;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.install.tool.trim().is_empty() {
            return Err(HubError::MissingConfig("install.tool".to_string()));
        }
        if self.chat.api_key_env.trim().is_empty() {
            return Err(HubError::MissingConfig("chat.api_key_env".to_string()));
        }
        self.server.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Source documents in precedence order
    #[serde(default)]
    pub files: Vec<String>,
    /// Candidate base directories, tried in order per source
    #[serde(default)]
    pub base_dirs: Vec<PathBuf>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            files: vec![
                "registry.json".to_string(),
                "skills.json".to_string(),
                "curated_seeds.json".to_string(),
            ],
            base_dirs: vec![PathBuf::from("../skills_index"), PathBuf::from("skills_index")],
        }
    }
}

impl SourcesConfig {
    fn merge(&mut self, patch: SourcesPatch) {
        if let Some(values) = patch.files {
            self.files = values;
        }
        if let Some(values) = patch.base_dirs {
            self.base_dirs = values;
        }
    }

    /// Resolve relative base directories against `root`.
    #[must_use]
    pub fn resolved_base_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.base_dirs
            .iter()
            .map(|dir| if dir.is_absolute() { dir.clone() } else { root.join(dir) })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    #[serde(default)]
    pub tool: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            tool: crate::core::skill::DEFAULT_INSTALL_TOOL.to_string(),
        }
    }
}

impl InstallConfig {
    fn merge(&mut self, patch: InstallPatch) {
        if let Some(value) = patch.tool {
            self.tool = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub max_tokens: u32,
    /// Name of the environment variable holding the credential
    #[serde(default)]
    pub api_key_env: String,
    /// Catalog entries rendered into the prompt context
    #[serde(default)]
    pub context_limit: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
            api_key_env: "OPENAI_API_KEY".to_string(),
            context_limit: 10,
        }
    }
}

impl ChatConfig {
    fn merge(&mut self, patch: ChatPatch) {
        if let Some(value) = patch.endpoint {
            self.endpoint = value;
        }
        if let Some(value) = patch.model {
            self.model = value;
        }
        if let Some(value) = patch.max_tokens {
            self.max_tokens = value;
        }
        if let Some(value) = patch.api_key_env {
            self.api_key_env = value;
        }
        if let Some(value) = patch.context_limit {
            self.context_limit = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl ServerConfig {
    fn merge(&mut self, patch: ServerPatch) {
        if let Some(value) = patch.bind {
            self.bind = value;
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|err| HubError::Config(format!("invalid server.bind {}: {err}", self.bind)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub sources: Option<SourcesPatch>,
    pub install: Option<InstallPatch>,
    pub chat: Option<ChatPatch>,
    pub server: Option<ServerPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SourcesPatch {
    pub files: Option<Vec<String>>,
    pub base_dirs: Option<Vec<PathBuf>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InstallPatch {
    pub tool: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChatPatch {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub api_key_env: Option<String>,
    pub context_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServerPatch {
    pub bind: Option<String>,
}

fn env_string(env: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    env(key).filter(|value| !value.trim().is_empty())
}

fn env_u32(env: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<Option<u32>> {
    match env(key) {
        Some(value) => value
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|err| HubError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}

fn env_list(env: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<Vec<String>> {
    env(key).map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
}
