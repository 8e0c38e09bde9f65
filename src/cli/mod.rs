//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Skill Hub - browse, search and chat over the aggregated skill registry
#[derive(Parser, Debug)]
#[command(name = "skillhub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ./skillhub.toml, then ~/.config/skillhub/config.toml)
    #[arg(long, global = true, env = "SKILLHUB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_args(self.machine, self.output_format)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the catalog and chat endpoints over HTTP
    Serve(commands::serve::ServeArgs),

    /// Browse the catalog with a named filter, sorted by composite score
    List(commands::list::ListArgs),

    /// Search skills by name or description
    Search(commands::search::SearchArgs),

    /// Show one skill with its inferred category
    Show(commands::show::ShowArgs),

    /// Show skills grouped by category
    Categories(commands::categories::CategoriesArgs),

    /// Render the catalog as an awesome-list markdown document
    Awesome(commands::awesome::AwesomeArgs),

    /// Print the chat context slice for the catalog
    Context(commands::context::ContextArgs),

    /// Ask the assistant for skill recommendations
    Chat(commands::chat::ChatArgs),

    /// Show where each source was found and what it contributed
    Sources(commands::sources::SourcesArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn machine_flag_selects_json() {
        let cli = Cli::try_parse_from(["skillhub", "-m", "list"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["skillhub", "search", "git", "-vv", "-O", "tsv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output_format(), OutputFormat::Tsv);
        assert!(matches!(cli.command, Commands::Search(ref args) if args.query == "git"));
    }

    #[test]
    fn categories_members_flag_coexists_with_machine() {
        let cli = Cli::try_parse_from(["skillhub", "-m", "categories", "-M"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Categories(ref args) if args.members));

        let cli = Cli::try_parse_from(["skillhub", "categories", "--members", "-m"]).unwrap();
        assert!(cli.machine);
        assert!(matches!(cli.command, Commands::Categories(ref args) if args.members));
    }
}
