//! skillhub list - Browse the catalog

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::commands::{SKILL_TSV_HEADERS, report_empty_catalog, skill_row, skill_tsv_row};
use crate::cli::output::{OutputFormat, emit_json, emit_jsonl, emit_tsv, machine_ok};
use crate::error::Result;
use crate::search::{BrowseFilter, browse, filter_by_tier};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Browse filter: all, featured, trusted, grade-a
    #[arg(long, short, default_value = "all")]
    pub filter: String,

    /// Only skills with this exact tier ("all" disables)
    #[arg(long)]
    pub tier: Option<String>,

    /// Maximum number of skills to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let filter: BrowseFilter = args.filter.parse()?;
    let catalog = ctx.registry().load();
    if catalog.is_empty() {
        return report_empty_catalog(ctx);
    }

    let scoped = match args.tier.as_deref() {
        Some(tier) => filter_by_tier(&catalog, tier),
        None => catalog.iter().collect(),
    };
    let mut view = browse(scoped, filter, "");
    let total = view.len();
    if let Some(limit) = args.limit {
        view.truncate(limit);
    }

    match ctx.output_format {
        OutputFormat::Json => emit_json(&machine_ok(serde_json::json!({
            "filter": filter,
            "count": view.len(),
            "total": total,
            "skills": view,
        }))),
        OutputFormat::Jsonl => emit_jsonl(&view),
        OutputFormat::Tsv => {
            emit_tsv(SKILL_TSV_HEADERS, &view, skill_tsv_row);
            Ok(())
        }
        OutputFormat::Human | OutputFormat::Plain => {
            let colors = ctx.output_format.use_colors();
            if view.is_empty() {
                println!("No skills match filter '{filter}'");
                return Ok(());
            }
            for skill in &view {
                println!("{}", skill_row(skill, colors));
            }
            println!();
            let summary = format!("{} of {total} skills (filter: {filter})", view.len());
            if colors {
                println!("{}", summary.dimmed());
            } else {
                println!("{summary}");
            }
            Ok(())
        }
    }
}
