//! Named browse filters and the tier filter

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::skill::Skill;
use crate::error::HubError;

/// Tier value that disables tier filtering.
pub const ALL_TIERS: &str = "all";

/// Named subset selection for browse views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowseFilter {
    #[default]
    All,
    /// `tier == "featured"`
    Featured,
    /// `tier == "trusted"`
    Trusted,
    /// `grade == "A"`
    GradeA,
}

impl BrowseFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Featured, Self::Trusted, Self::GradeA];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::Trusted => "trusted",
            Self::GradeA => "grade-a",
        }
    }

    #[must_use]
    pub fn matches(self, skill: &Skill) -> bool {
        match self {
            Self::All => true,
            Self::Featured => skill.tier == "featured",
            Self::Trusted => skill.tier == "trusted",
            Self::GradeA => skill.grade == "A",
        }
    }
}

impl FromStr for BrowseFilter {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "featured" | "tier" => Ok(Self::Featured),
            "trusted" => Ok(Self::Trusted),
            "grade-a" | "grade_a" | "grade" => Ok(Self::GradeA),
            other => Err(HubError::BadRequest(format!(
                "unknown browse filter '{other}' (expected all|featured|trusted|grade-a)"
            ))),
        }
    }
}

impl fmt::Display for BrowseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep skills whose tier equals `tier` exactly; [`ALL_TIERS`] keeps everything.
pub fn filter_by_tier<'a>(skills: impl IntoIterator<Item = &'a Skill>, tier: &str) -> Vec<&'a Skill> {
    skills
        .into_iter()
        .filter(|skill| tier == ALL_TIERS || skill.tier == tier)
        .collect()
}
