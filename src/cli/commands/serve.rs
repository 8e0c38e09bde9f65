//! skillhub serve - HTTP catalog and chat server

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::cli::commands::block_on;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::server;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides server.bind)
    #[arg(long, short)]
    pub bind: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ServeArgs) -> Result<()> {
    let server_config = match &args.bind {
        Some(bind) => ServerConfig { bind: bind.clone() },
        None => ctx.config.server.clone(),
    };
    let addr = server_config.socket_addr()?;

    let state = ctx.app_state();
    if !state.chat.has_credential() {
        info!(
            env = %ctx.config.chat.api_key_env,
            "Chat credential not set; /api/chat will answer with a notice"
        );
    }
    block_on(server::serve(addr, state))?
}
