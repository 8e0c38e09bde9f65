//! Awesome-list markdown rendering of the catalog

use std::fmt::Write as _;

use crate::core::category::group_by_category;
use crate::core::skill::Skill;

/// Public catalog page; skill links append the URL-encoded name.
pub const SKILL_BASE_URL: &str = "https://clawhub.ai/skills";

const MAX_DESCRIPTION_CHARS: usize = 150;
const TRUNCATED_DESCRIPTION_CHARS: usize = 147;

const HEADER: &[&str] = &[
    "# Awesome OpenClaw Skills",
    "",
    "A curated list of OpenClaw AI agent skills. Vetted, categorized, and ready to install.",
    "",
    "**[Browse on ClawHub](https://clawhub.ai/skills)** · **[Vetting Tool](README.md)**",
    "",
    "---",
    "",
    "## Table of Contents",
    "",
];

/// Anchor slug for a category heading.
#[must_use]
pub fn anchor_slug(category: &str) -> String {
    category.to_lowercase().replace([' ', '/'], "-")
}

/// Public page URL for a skill.
#[must_use]
pub fn skill_url(name: &str) -> String {
    format!("{SKILL_BASE_URL}/{}", urlencoding::encode(name))
}

fn display_description(skill: &Skill) -> String {
    let desc = skill.description_text().trim();
    if desc.is_empty() {
        return "No description".to_string();
    }
    if desc.chars().count() > MAX_DESCRIPTION_CHARS {
        let mut cut: String = desc.chars().take(TRUNCATED_DESCRIPTION_CHARS).collect();
        cut.push_str("...");
        return cut;
    }
    desc.to_string()
}

fn grade_badge(grade: &str) -> String {
    match grade {
        "A" | "B" => format!(
            " ![{grade}](https://img.shields.io/badge/grade-{grade}-green?style=flat-square)"
        ),
        _ => String::new(),
    }
}

/// Render the catalog as awesome-list markdown.
///
/// Sections follow category display order; members within a section are
/// sorted case-insensitively by name.
#[must_use]
pub fn render_awesome_list<'a>(skills: impl IntoIterator<Item = &'a Skill>) -> String {
    let groups = group_by_category(skills);
    let mut out = String::new();

    for line in HEADER {
        out.push_str(line);
        out.push('\n');
    }
    for category in groups.order() {
        let _ = writeln!(out, "- [{category}](#{})", anchor_slug(category));
    }
    out.push('\n');

    for category in groups.order() {
        let _ = writeln!(out, "## {category}\n");
        let mut members = groups.members(category).to_vec();
        members.sort_by_cached_key(|s| s.name.to_lowercase());
        for skill in members {
            let _ = writeln!(
                out,
                "- [{}]({}){} — {}",
                skill.name,
                skill_url(&skill.name),
                grade_badge(&skill.grade),
                display_description(skill)
            );
        }
        out.push('\n');
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    out
}
