//! skillhub show - Show one skill

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, machine_ok};
use crate::core::category::category_of;
use crate::core::skill::Skill;
use crate::error::{HubError, Result, suggest_similar_skills};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Exact skill name
    pub name: String,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let catalog = ctx.registry().load();
    let Some(skill) = catalog.get(&args.name) else {
        let names: Vec<&str> = catalog.names().collect();
        return Err(HubError::SkillNotFound {
            name: args.name.clone(),
            similar: suggest_similar_skills(&args.name, &names, 3),
        });
    };

    let category = category_of(skill);
    match ctx.output_format {
        OutputFormat::Json => emit_json(&machine_ok(serde_json::json!({
            "skill": skill,
            "category": category,
        }))),
        OutputFormat::Jsonl => emit_jsonl(&[skill]),
        OutputFormat::Tsv => {
            println!("field\tvalue");
            for (key, value) in fields(skill, category) {
                println!("{key}\t{}", crate::cli::output::tsv_cell(&value));
            }
            Ok(())
        }
        OutputFormat::Human | OutputFormat::Plain => {
            let mut layout = if ctx.output_format.use_colors() {
                HumanLayout::new()
            } else {
                HumanLayout::plain()
            };
            layout.title(&skill.name);
            for (key, value) in fields(skill, category).into_iter().skip(1) {
                layout.kv(key, &value);
            }
            emit_human(layout);
            if ctx.output_format.use_colors() {
                println!();
                println!("{} {}", "Install:".dimmed(), skill.install_cmd.cyan());
            }
            Ok(())
        }
    }
}

fn fields(skill: &Skill, category: &str) -> Vec<(&'static str, String)> {
    let mut out = vec![
        ("name", skill.name.clone()),
        ("category", category.to_string()),
        ("grade", skill.grade.clone()),
        ("tier", skill.tier.clone()),
        ("safety_score", skill.safety_score.to_string()),
        ("composite_score", skill.composite_score.to_string()),
        ("install_cmd", skill.install_cmd.clone()),
        (
            "description",
            skill.description.clone().unwrap_or_else(|| "-".to_string()),
        ),
    ];
    if let Some(usage) = &skill.usage_summary {
        out.push(("usage", usage.clone()));
    }
    out
}
