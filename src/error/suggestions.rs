//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints built
//! from the error's JSON context.

use std::collections::HashSet;

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::SkillNotFound => suggest_skill_not_found(context),
        ErrorCode::SourceUnavailable => suggest_source_unavailable(context),
        ErrorCode::ConfigMissingRequired => suggest_config_missing_required(context),
        ErrorCode::SearchNoResults => suggest_search_no_results(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_skill_not_found(context: Option<&Value>) -> String {
    let Some(name) = context
        .and_then(|c| c.get("skill"))
        .and_then(Value::as_str)
    else {
        return ErrorCode::SkillNotFound.suggestion().to_string();
    };

    let similar: Vec<&str> = context
        .and_then(|c| c.get("similar"))
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if similar.is_empty() {
        format!(
            "Skill '{name}' not found. Try:\n  - `skillhub search {name}` to find similar skills\n  - `skillhub list` to see the catalog"
        )
    } else {
        format!(
            "Skill '{name}' not found. Did you mean: {}?",
            similar.join(", ")
        )
    }
}

fn suggest_source_unavailable(context: Option<&Value>) -> String {
    match context
        .and_then(|c| c.get("source"))
        .and_then(Value::as_str)
    {
        Some(source) => format!(
            "Source '{source}' could not be read. Check that it exists in a configured base directory and holds a JSON array"
        ),
        None => ErrorCode::SourceUnavailable.suggestion().to_string(),
    }
}

fn suggest_config_missing_required(context: Option<&Value>) -> String {
    match context
        .and_then(|c| c.get("config_key"))
        .and_then(Value::as_str)
    {
        Some(key) => format!("Required config '{key}' is missing. Set it in skillhub.toml"),
        None => ErrorCode::ConfigMissingRequired.suggestion().to_string(),
    }
}

fn suggest_search_no_results(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("query")).and_then(Value::as_str) {
        Some(q) if !q.is_empty() => format!(
            "No results for '{q}'. Try broader search terms, or `skillhub list` to see all skills"
        ),
        _ => ErrorCode::SearchNoResults.suggestion().to_string(),
    }
}

/// Get suggestions for similar skill names based on a misspelled name.
pub fn suggest_similar_skills(query: &str, available: &[&str], max_suggestions: usize) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut scored: Vec<_> = available
        .iter()
        .map(|s| (s, similarity_score(&query_lower, &s.to_lowercase())))
        .filter(|(_, score)| *score > 0.3)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(s, _)| (*s).to_string())
        .collect()
}

/// Jaccard similarity over character trigrams.
fn similarity_score(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_trigrams: HashSet<_> = trigrams(a).collect();
    let b_trigrams: HashSet<_> = trigrams(b).collect();

    if a_trigrams.is_empty() || b_trigrams.is_empty() {
        // short strings
        if a.starts_with(b) || b.starts_with(a) {
            return 0.8;
        }
        if a.contains(b) || b.contains(a) {
            return 0.5;
        }
        return 0.0;
    }

    let intersection = a_trigrams.intersection(&b_trigrams).count();
    let union = a_trigrams.union(&b_trigrams).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

fn trigrams(s: &str) -> impl Iterator<Item = &str> {
    (0..s.len().saturating_sub(2)).filter_map(move |i| s.get(i..i + 3))
}
