//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::future::Future;

use colored::Colorize;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::cli::output::{OutputFormat, emit_json, machine_ok};
use crate::core::skill::Skill;
use crate::error::Result;

pub mod awesome;
pub mod categories;
pub mod chat;
pub mod context;
pub mod list;
pub mod search;
pub mod serve;
pub mod show;
pub mod sources;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Serve(args) => serve::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::Awesome(args) => awesome::run(ctx, args),
        Commands::Context(args) => context::run(ctx, args),
        Commands::Chat(args) => chat::run(ctx, args),
        Commands::Sources(args) => sources::run(ctx, args),
    }
}

/// Drive a future on a single-threaded runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

/// Hint printed instead of an empty listing.
pub(crate) fn report_empty_catalog(ctx: &AppContext) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => {
            emit_json(&machine_ok(Vec::<Skill>::new()).with_warning("catalog is empty"))
        }
        OutputFormat::Jsonl | OutputFormat::Tsv => Ok(()),
        OutputFormat::Human | OutputFormat::Plain => {
            let dirs = ctx.config.sources.resolved_base_dirs(&ctx.root);
            let searched: Vec<String> = dirs.iter().map(|d| d.display().to_string()).collect();
            if ctx.output_format.use_colors() {
                println!("{}", "No skills found. Run: skill-sync".dimmed());
            } else {
                println!("No skills found. Run: skill-sync");
            }
            println!("Searched: {}", searched.join(", "));
            Ok(())
        }
    }
}

/// Entry used by list and search: a summary line, then the wrapped
/// description indented underneath.
pub(crate) fn skill_row(skill: &Skill, colors: bool) -> String {
    let grade = if colors {
        match skill.grade.as_str() {
            "A" => skill.grade.green().bold().to_string(),
            "B" => skill.grade.green().to_string(),
            "C" => skill.grade.yellow().to_string(),
            _ => skill.grade.red().to_string(),
        }
    } else {
        skill.grade.clone()
    };
    let name = if colors { skill.name.bold().to_string() } else { skill.name.clone() };
    let line = format!("{name}  [{grade} {} {}]", skill.tier, skill.composite_score);

    let description = skill.description_text().trim();
    if description.is_empty() {
        return line;
    }
    let options = textwrap::Options::new(76)
        .initial_indent("    ")
        .subsequent_indent("    ");
    format!("{line}\n{}", textwrap::fill(description, options))
}

/// TSV columns shared by list and search.
pub(crate) const SKILL_TSV_HEADERS: &[&str] =
    &["name", "grade", "tier", "safety_score", "composite_score", "install_cmd", "description"];

pub(crate) fn skill_tsv_row(skill: &&Skill) -> Vec<String> {
    use crate::cli::output::tsv_cell;
    vec![
        tsv_cell(&skill.name),
        tsv_cell(&skill.grade),
        tsv_cell(&skill.tier),
        skill.safety_score.to_string(),
        skill.composite_score.to_string(),
        tsv_cell(&skill.install_cmd),
        tsv_cell(skill.description_text()),
    ]
}
