//! skillhub categories - Skills grouped by category

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::report_empty_catalog;
use crate::cli::output::{
    HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, machine_ok, tsv_cell,
};
use crate::core::category::group_by_category;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// List member skill names under each category
    #[arg(long, short = 'M')]
    pub members: bool,
}

pub fn run(ctx: &AppContext, args: &CategoriesArgs) -> Result<()> {
    let catalog = ctx.registry().load();
    if catalog.is_empty() {
        return report_empty_catalog(ctx);
    }
    let groups = group_by_category(&catalog);

    match ctx.output_format {
        OutputFormat::Json => {
            let body: Vec<_> = groups.iter().collect();
            emit_json(&machine_ok(body))
        }
        OutputFormat::Jsonl => {
            let body: Vec<_> = groups.iter().collect();
            emit_jsonl(&body)
        }
        OutputFormat::Tsv => {
            println!("category\tcount\tskills");
            for group in groups.iter() {
                let names: Vec<&str> = group.skills.iter().map(|s| s.name.as_str()).collect();
                println!(
                    "{}\t{}\t{}",
                    tsv_cell(group.category),
                    group.skills.len(),
                    tsv_cell(&names.join(","))
                );
            }
            Ok(())
        }
        OutputFormat::Human | OutputFormat::Plain => {
            let mut layout = if ctx.output_format.use_colors() {
                HumanLayout::new()
            } else {
                HumanLayout::plain()
            };
            for group in groups.iter() {
                layout.section(&format!("{} ({})", group.category, group.skills.len()));
                if args.members {
                    for skill in group.skills {
                        layout.bullet(&skill.name);
                    }
                }
                layout.blank();
            }
            emit_human(layout);
            Ok(())
        }
    }
}
