//! skillhub search - Case-insensitive substring search

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::commands::{SKILL_TSV_HEADERS, report_empty_catalog, skill_row, skill_tsv_row};
use crate::cli::output::{OutputFormat, emit_json, emit_jsonl, emit_tsv, machine_ok};
use crate::error::{ErrorCode, Result, StructuredError};
use crate::search::{ALL_TIERS, filter_by_tier, search};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text matched against name and description
    pub query: String,

    /// Only skills with this exact tier
    #[arg(long, default_value = ALL_TIERS)]
    pub tier: String,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let catalog = ctx.registry().load();
    if catalog.is_empty() {
        return report_empty_catalog(ctx);
    }

    let results = search(filter_by_tier(&catalog, &args.tier), &args.query);

    match ctx.output_format {
        OutputFormat::Json => emit_json(&machine_ok(serde_json::json!({
            "query": args.query,
            "tier": args.tier,
            "count": results.len(),
            "skills": results,
        }))),
        OutputFormat::Jsonl => emit_jsonl(&results),
        OutputFormat::Tsv => {
            emit_tsv(SKILL_TSV_HEADERS, &results, skill_tsv_row);
            Ok(())
        }
        OutputFormat::Human | OutputFormat::Plain => {
            let colors = ctx.output_format.use_colors();
            if results.is_empty() {
                println!("{}", no_results_hint(&args.query));
                return Ok(());
            }
            for skill in &results {
                println!("{}", skill_row(skill, colors));
            }
            println!();
            let summary = format!("{} matches for '{}'", results.len(), args.query);
            if colors {
                println!("{}", summary.dimmed());
            } else {
                println!("{summary}");
            }
            Ok(())
        }
    }
}

/// Recovery hint shown when a search matches nothing.
fn no_results_hint(query: &str) -> String {
    StructuredError::new(ErrorCode::SearchNoResults, format!("No skills match '{query}'"))
        .with_context(serde_json::json!({ "query": query }))
        .suggestion
}
