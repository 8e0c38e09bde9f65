//! skillhub chat - Ask the assistant for skill recommendations

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::chat::{ChatReply, ChatRequest, ContextEntry};
use crate::cli::commands::block_on;
use crate::cli::output::{OutputFormat, emit_json, machine_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// What you want to get done
    pub message: String,
}

pub fn run(ctx: &AppContext, args: &ChatArgs) -> Result<()> {
    let catalog = ctx.registry().load();
    let entries: Vec<ContextEntry> = catalog.iter().map(ContextEntry::from).collect();
    let request = ChatRequest::new(args.message.clone(), entries);

    let service = ctx.chat_service();
    let reply = block_on(async { service.reply(&request).await })??;

    match ctx.output_format {
        OutputFormat::Json => emit_json(&machine_ok(ChatReply::new(reply))),
        OutputFormat::Human if ctx.output_format.use_colors() && !service.has_credential() => {
            println!("{}", reply.yellow());
            Ok(())
        }
        _ => {
            println!("{reply}");
            Ok(())
        }
    }
}
