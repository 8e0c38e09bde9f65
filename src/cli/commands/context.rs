//! skillhub context - Print the chat context slice

use clap::Args;

use crate::app::AppContext;
use crate::chat::{ContextEntry, build_context_slice, system_prompt};
use crate::cli::output::{OutputFormat, emit_json, machine_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Number of skills in the slice (default: chat.context_limit)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Print the full system prompt instead of the bare slice
    #[arg(long)]
    pub prompt: bool,
}

pub fn run(ctx: &AppContext, args: &ContextArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.chat.context_limit);
    let install = ctx.install_template();
    let catalog = ctx.registry().load();
    let entries: Vec<ContextEntry> = catalog.iter().map(ContextEntry::from).collect();

    let slice = build_context_slice(&entries, limit, &install);
    let text = if args.prompt {
        system_prompt(&slice, limit, &install)
    } else {
        slice
    };

    match ctx.output_format {
        OutputFormat::Json => emit_json(&machine_ok(serde_json::json!({
            "limit": limit,
            "available": entries.len(),
            "context": text,
        }))),
        _ => {
            println!("{text}");
            Ok(())
        }
    }
}
