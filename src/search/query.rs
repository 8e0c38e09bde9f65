//! Search, sort and browse projections

use crate::core::skill::Skill;
use crate::search::filters::BrowseFilter;

/// Case-insensitive substring match on name or description.
///
/// A blank query matches everything. Otherwise the query is matched as
/// given, surrounding whitespace included.
pub fn search<'a>(skills: impl IntoIterator<Item = &'a Skill>, query: &str) -> Vec<&'a Skill> {
    if query.trim().is_empty() {
        return skills.into_iter().collect();
    }
    let needle = query.to_lowercase();
    skills
        .into_iter()
        .filter(|skill| matches_needle(skill, &needle))
        .collect()
}

fn matches_needle(skill: &Skill, needle: &str) -> bool {
    skill.name.to_lowercase().contains(needle)
        || skill.description_text().to_lowercase().contains(needle)
}

/// Stable sort by composite score, highest first.
pub fn sort_by_composite<'a>(skills: impl IntoIterator<Item = &'a Skill>) -> Vec<&'a Skill> {
    let mut sorted: Vec<&Skill> = skills.into_iter().collect();
    sorted.sort_by(|a, b| {
        b.composite_score
            .value()
            .total_cmp(&a.composite_score.value())
    });
    sorted
}

/// Browse view: named filter, then search, then sort.
pub fn browse<'a>(
    skills: impl IntoIterator<Item = &'a Skill>,
    filter: BrowseFilter,
    query: &str,
) -> Vec<&'a Skill> {
    let filtered = skills.into_iter().filter(|skill| filter.matches(skill));
    sort_by_composite(search(filtered, query))
}
