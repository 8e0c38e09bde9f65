//! Keyword-based category inference
//!
//! The taxonomy is an ordered table of `(category, keywords)` rules. A skill's
//! name and description are joined, lowercased, and the first rule with any
//! keyword occurring as a substring wins. Nothing matching falls back to
//! [`GENERAL`]. An explicit category on the record always takes precedence
//! and is not checked against the table.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::skill::Skill;

/// Fallback category for skills no rule matches.
pub const GENERAL: &str = "General";

/// One taxonomy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// The fixed taxonomy, in precedence order.
pub const TAXONOMY: &[CategoryRule] = &[
    CategoryRule {
        name: "AI/ML",
        keywords: &[
            "ai", "llm", "embedding", "rag", "model", "gpt", "claude", "gemini", "openai",
            "translate", "summarize",
        ],
    },
    CategoryRule {
        name: "Productivity",
        keywords: &["notion", "calendar", "task", "todo", "schedule", "email", "document"],
    },
    CategoryRule {
        name: "Development",
        keywords: &[
            "github", "git", "api", "code", "ci/cd", "database", "dev", "sqlite", "claude",
        ],
    },
    CategoryRule {
        name: "Communication",
        keywords: &["slack", "discord", "telegram", "twilio", "message", "chat", "email"],
    },
    CategoryRule {
        name: "Web",
        keywords: &["browser", "http", "scrape", "fetch", "request", "url", "search"],
    },
    CategoryRule {
        name: "Utility",
        keywords: &["file", "calculator", "convert", "format", "csv", "json"],
    },
    CategoryRule {
        name: "Science",
        keywords: &["research", "data", "analysis", "statistic", "science", "market"],
    },
    CategoryRule {
        name: "Media",
        keywords: &["video", "audio", "image", "youtube", "pdf"],
    },
    CategoryRule {
        name: "Social",
        keywords: &["twitter", "seo", "content", "marketing"],
    },
    CategoryRule {
        name: "Finance",
        keywords: &["stock", "crypto", "invest", "finance"],
    },
    CategoryRule {
        name: "Location",
        keywords: &["map", "weather", "travel", "location"],
    },
    CategoryRule {
        name: "Smart Home",
        keywords: &["home", "iot", "assistant", "automation"],
    },
];

/// Classify against the fixed [`TAXONOMY`].
#[must_use]
pub fn classify(name: &str, description: &str) -> &'static str {
    classify_with(TAXONOMY, name, description)
}

/// Classify against an arbitrary rule table. First matching rule wins.
#[must_use]
pub fn classify_with(table: &[CategoryRule], name: &str, description: &str) -> &'static str {
    let text = format!("{name} {description}").to_lowercase();
    table
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| text.contains(kw)))
        .map_or(GENERAL, |rule| rule.name)
}

/// Effective category of a catalog entry: explicit override, else inferred.
#[must_use]
pub fn category_of(skill: &Skill) -> &str {
    skill
        .category
        .as_deref()
        .unwrap_or_else(|| classify(&skill.name, skill.description_text()))
}

fn is_taxonomy_category(name: &str) -> bool {
    TAXONOMY.iter().any(|rule| rule.name == name)
}

/// Catalog partitioned by effective category.
///
/// Members keep catalog order. The display order lists taxonomy categories
/// with members (table order), then [`GENERAL`], then categories that only
/// exist through explicit overrides in first-seen order.
#[derive(Debug, Clone)]
pub struct CategoryGroups<'a> {
    order: Vec<String>,
    groups: HashMap<String, Vec<&'a Skill>>,
}

/// One group in display order, as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub skills: &'a [&'a Skill],
}

impl<'a> CategoryGroups<'a> {
    /// Display order of non-empty categories.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Members of one category, in catalog order.
    #[must_use]
    pub fn members(&self, category: &str) -> &[&'a Skill] {
        self.groups.get(category).map_or(&[], Vec::as_slice)
    }

    /// Groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = CategoryGroup<'_>> {
        self.order.iter().map(|category| CategoryGroup {
            category,
            skills: self.members(category),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Group skills by effective category.
pub fn group_by_category<'a>(skills: impl IntoIterator<Item = &'a Skill>) -> CategoryGroups<'a> {
    let mut groups: HashMap<String, Vec<&'a Skill>> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for skill in skills {
        let category = category_of(skill).to_string();
        let members = groups.entry(category.clone()).or_insert_with(|| {
            first_seen.push(category);
            Vec::new()
        });
        members.push(skill);
    }

    let mut order: Vec<String> = TAXONOMY
        .iter()
        .map(|rule| rule.name)
        .chain(std::iter::once(GENERAL))
        .filter(|name| groups.contains_key(*name))
        .map(str::to_string)
        .collect();
    order.extend(
        first_seen
            .into_iter()
            .filter(|name| name != GENERAL && !is_taxonomy_category(name)),
    );

    CategoryGroups { order, groups }
}
