//! skillhub awesome - Render the catalog as an awesome-list document

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::commands::report_empty_catalog;
use crate::cli::output::{OutputFormat, emit_json, machine_ok};
use crate::core::awesome::render_awesome_list;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AwesomeArgs {
    /// Write the document here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &AwesomeArgs) -> Result<()> {
    let catalog = ctx.registry().load();
    if catalog.is_empty() {
        return report_empty_catalog(ctx);
    }
    let document = render_awesome_list(&catalog);

    if let Some(path) = &args.output {
        std::fs::write(path, &document)?;
        info!(path = %path.display(), skills = catalog.len(), "Wrote awesome list");
        return match ctx.output_format {
            OutputFormat::Json => emit_json(&machine_ok(serde_json::json!({
                "path": path,
                "skills": catalog.len(),
                "bytes": document.len(),
            }))),
            OutputFormat::Human if ctx.output_format.use_colors() => {
                println!(
                    "{} {} ({} skills)",
                    "Wrote".green(),
                    path.display(),
                    catalog.len()
                );
                Ok(())
            }
            _ => {
                println!("Wrote {} ({} skills)", path.display(), catalog.len());
                Ok(())
            }
        };
    }

    match ctx.output_format {
        OutputFormat::Json => emit_json(&machine_ok(serde_json::json!({
            "skills": catalog.len(),
            "markdown": document,
        }))),
        _ => {
            print!("{document}");
            Ok(())
        }
    }
}
