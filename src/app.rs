//! Process-wide context built once from CLI flags, config and environment

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::chat::{ApiKey, ChatService, OpenAiClient};
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::core::skill::InstallTemplate;
use crate::error::Result;
use crate::registry::Registry;
use crate::server::AppState;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    /// Directory relative source locations resolve against
    pub root: PathBuf,
    api_key: Option<ApiKey>,
}

impl AppContext {
    /// The only place the credential is read from the environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &root)?;
        let api_key = std::env::var(&config.chat.api_key_env)
            .ok()
            .and_then(ApiKey::new);
        debug!(
            root = %root.display(),
            credential = api_key.is_some(),
            "Application context ready"
        );
        Ok(Self::new(config, root, cli.output_format(), api_key))
    }

    pub fn new(
        config: Config,
        root: impl AsRef<Path>,
        output_format: OutputFormat,
        api_key: Option<ApiKey>,
    ) -> Self {
        Self {
            config,
            output_format,
            root: root.as_ref().to_path_buf(),
            api_key,
        }
    }

    pub fn install_template(&self) -> InstallTemplate {
        InstallTemplate::new(self.config.install.tool.clone())
    }

    pub fn registry(&self) -> Registry {
        Registry::from_config(&self.config, &self.root)
    }

    pub fn chat_service(&self) -> ChatService {
        ChatService::new(
            Arc::new(OpenAiClient::new(self.config.chat.endpoint.clone())),
            self.api_key.clone(),
            self.config.chat.clone(),
            self.install_template(),
        )
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.registry(), self.chat_service())
    }
}
