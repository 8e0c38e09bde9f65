//! First-seen-wins merge of normalized records into a catalog

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::skill::Skill;
use crate::registry::normalize::Normalizer;
use crate::registry::source::LoadedSource;

/// Deduplicated, normalized skills in first-seen order.
///
/// Immutable once built; every view over it is a borrowed projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    skills: Vec<Skill>,
}

impl Catalog {
    /// Normalize and merge loaded sources in precedence order.
    ///
    /// A name already inserted by an earlier source, or earlier in the same
    /// source, discards the later sighting in full.
    pub fn aggregate(sources: &[LoadedSource], normalizer: &Normalizer) -> (Self, AggregationReport) {
        let mut seen: HashSet<String> = HashSet::new();
        let mut skills = Vec::new();
        let mut report = AggregationReport::default();

        for source in sources {
            let mut stats = SourceStats::new(source);

            for raw in &source.records {
                let skill = match normalizer.normalize(raw) {
                    Ok(skill) => skill,
                    Err(err) => {
                        debug!(source = %source.name, error = %err, "Dropping record");
                        stats.invalid += 1;
                        continue;
                    }
                };

                if seen.insert(skill.name.clone()) {
                    skills.push(skill);
                    stats.accepted += 1;
                } else {
                    debug!(source = %source.name, skill = %skill.name, "Skipping duplicate");
                    stats.duplicates += 1;
                }
            }

            report.sources.push(stats);
        }

        info!(
            skills = skills.len(),
            sources_found = report.sources.iter().filter(|s| s.location.is_some()).count(),
            duplicates = report.total_duplicates(),
            invalid = report.total_invalid(),
            "Catalog aggregated"
        );

        (Self { skills }, report)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Skill> {
        self.skills.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Exact, case-sensitive lookup by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|skill| skill.name.as_str())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Skill;
    type IntoIter = std::slice::Iter<'a, Skill>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}

/// Per-source counts from one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    pub name: String,
    pub location: Option<PathBuf>,
    pub read: usize,
    pub accepted: usize,
    pub duplicates: usize,
    pub invalid: usize,
}

impl SourceStats {
    fn new(source: &LoadedSource) -> Self {
        Self {
            name: source.name.clone(),
            location: source.location.clone(),
            read: source.records.len(),
            accepted: 0,
            duplicates: 0,
            invalid: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    pub sources: Vec<SourceStats>,
}

impl AggregationReport {
    #[must_use]
    pub fn total_read(&self) -> usize {
        self.sources.iter().map(|s| s.read).sum()
    }

    #[must_use]
    pub fn total_accepted(&self) -> usize {
        self.sources.iter().map(|s| s.accepted).sum()
    }

    #[must_use]
    pub fn total_duplicates(&self) -> usize {
        self.sources.iter().map(|s| s.duplicates).sum()
    }

    #[must_use]
    pub fn total_invalid(&self) -> usize {
        self.sources.iter().map(|s| s.invalid).sum()
    }
}
