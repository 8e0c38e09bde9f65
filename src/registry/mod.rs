//! Registry aggregation: load sources, normalize, merge
//!
//! A [`Registry`] holds no skill data. Each call to [`Registry::load`]
//! re-reads every source and builds a fresh [`Catalog`].

pub mod merge;
pub mod normalize;
pub mod source;

use std::path::Path;

pub use merge::{AggregationReport, Catalog, SourceStats};
pub use normalize::Normalizer;
pub use source::{LoadedSource, SourceLoader};

use crate::config::Config;
use crate::core::skill::InstallTemplate;

#[derive(Debug, Clone)]
pub struct Registry {
    loader: SourceLoader,
    normalizer: Normalizer,
}

impl Registry {
    pub fn new(loader: SourceLoader, normalizer: Normalizer) -> Self {
        Self { loader, normalizer }
    }

    /// Registry over the configured sources, relative dirs resolved against `root`.
    pub fn from_config(config: &Config, root: &Path) -> Self {
        Self::new(
            SourceLoader::from_config(&config.sources, root),
            Normalizer::new(InstallTemplate::new(config.install.tool.clone())),
        )
    }

    pub fn loader(&self) -> &SourceLoader {
        &self.loader
    }

    /// Run one aggregation pass.
    pub fn load(&self) -> Catalog {
        self.load_with_report().0
    }

    /// Run one aggregation pass, keeping the per-source counts.
    pub fn load_with_report(&self) -> (Catalog, AggregationReport) {
        let sources = self.loader.load();
        Catalog::aggregate(&sources, &self.normalizer)
    }
}
