//! Prompt context slice

use serde::{Deserialize, Serialize};

use crate::core::skill::{InstallTemplate, Skill};

/// Rendered in place of the slice when no skills are supplied.
pub const NO_SKILLS_LOADED: &str = "No skills loaded.";
const NO_DESCRIPTION: &str = "No description";

/// Skill summary a chat client sends along with its message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_cmd: Option<String>,
}

impl From<&Skill> for ContextEntry {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            description: skill.description.clone(),
            install_cmd: Some(skill.install_cmd.clone()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl ContextEntry {
    /// ``- **name**: description | Install: `cmd` ``
    #[must_use]
    pub fn render(&self, install: &InstallTemplate) -> String {
        let description = non_empty(self.description.as_deref()).unwrap_or(NO_DESCRIPTION);
        let command = non_empty(self.install_cmd.as_deref())
            .map_or_else(|| install.render(&self.name), str::to_string);
        format!("- **{}**: {description} | Install: `{command}`", self.name)
    }
}

/// Render the first `limit` entries, one per line, in the order given.
#[must_use]
pub fn build_context_slice(entries: &[ContextEntry], limit: usize, install: &InstallTemplate) -> String {
    let lines: Vec<String> = entries
        .iter()
        .take(limit)
        .map(|entry| entry.render(install))
        .collect();
    if lines.is_empty() {
        NO_SKILLS_LOADED.to_string()
    } else {
        lines.join("\n")
    }
}

/// System prompt wrapping a context slice.
#[must_use]
pub fn system_prompt(slice: &str, limit: usize, install: &InstallTemplate) -> String {
    format!(
        "You are a helpful assistant for the OpenClaw skills registry. \n\
         Users can install skills with: {tool} install <skill-name>\n\
         \n\
         Available skills (top {limit} for context):\n\
         {slice}\n\
         \n\
         When the user asks for a skill (e.g. \"GitHub integration\", \"weather\", \"calendar\"), \
         suggest relevant skills from the list and provide the install command.",
        tool = install.tool(),
    )
}
