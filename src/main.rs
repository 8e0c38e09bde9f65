//! skillhub - Skill registry hub
//!
//! Aggregates skill registries into one catalog and serves it to the CLI,
//! the HTTP API and the recommendation chat.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use skillhub::Result;
use skillhub::app::AppContext;
use skillhub::cli::{Cli, OutputFormat};
use skillhub::cli::output::machine_error_from;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if matches!(cli.output_format(), OutputFormat::Json | OutputFormat::Jsonl) {
                let body = machine_error_from(&e);
                println!("{}", serde_json::to_string(&body).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
                let suggestion = e.to_structured().suggestion;
                if !suggestion.is_empty() {
                    eprintln!("Hint: {suggestion}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    skillhub::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,skillhub=info",
        1 => "info,skillhub=debug",
        2 => "debug,skillhub=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.output_format().is_machine_readable() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
