//! skillhub sources - Where each source was found and what it contributed

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_json, emit_jsonl, machine_ok, tsv_cell};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SourcesArgs {}

pub fn run(ctx: &AppContext, _args: &SourcesArgs) -> Result<()> {
    let registry = ctx.registry();
    let (catalog, report) = registry.load_with_report();

    match ctx.output_format {
        OutputFormat::Json => emit_json(&machine_ok(serde_json::json!({
            "files": registry.loader().files(),
            "base_dirs": registry.loader().base_dirs(),
            "skills": catalog.len(),
            "sources": report.sources,
        }))),
        OutputFormat::Jsonl => emit_jsonl(&report.sources),
        OutputFormat::Tsv => {
            println!("name\tlocation\tread\taccepted\tduplicates\tinvalid");
            for stats in &report.sources {
                let location = stats
                    .location
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    tsv_cell(&stats.name),
                    tsv_cell(&location),
                    stats.read,
                    stats.accepted,
                    stats.duplicates,
                    stats.invalid
                );
            }
            Ok(())
        }
        OutputFormat::Human | OutputFormat::Plain => {
            let colors = ctx.output_format.use_colors();
            for stats in &report.sources {
                let location = match &stats.location {
                    Some(path) => path.display().to_string(),
                    None if colors => "not found".red().to_string(),
                    None => "not found".to_string(),
                };
                let name = if colors { stats.name.bold().to_string() } else { stats.name.clone() };
                println!("{name}  {location}");
                if stats.location.is_some() {
                    println!(
                        "    read {}, accepted {}, duplicates {}, invalid {}",
                        stats.read, stats.accepted, stats.duplicates, stats.invalid
                    );
                }
            }
            println!();
            println!(
                "{} skills from {} records ({} duplicates, {} invalid)",
                catalog.len(),
                report.total_read(),
                report.total_duplicates(),
                report.total_invalid()
            );
            Ok(())
        }
    }
}
