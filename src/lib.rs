pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod registry;
pub mod search;
pub mod server;
pub mod test_utils;

pub use error::{HubError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
