use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{Value, json};

use skillhub::core::category::{GENERAL, TAXONOMY, classify, group_by_category};
use skillhub::core::skill::{InstallTemplate, Score, Skill};
use skillhub::registry::{Catalog, LoadedSource, Normalizer};
use skillhub::search::{BrowseFilter, browse, search, sort_by_composite};

fn arb_record() -> impl Strategy<Value = Value> {
    (
        "[a-d]{1,3}",
        prop::option::of(".{0,40}"),
        prop::option::of(0.0f64..100.0),
    )
        .prop_map(|(name, description, composite)| {
            let mut record = json!({ "name": name });
            if let Some(description) = description {
                record["description"] = json!(description);
            }
            if let Some(composite) = composite {
                record["composite_score"] = json!(composite);
            }
            record
        })
}

fn arb_sources() -> impl Strategy<Value = Vec<LoadedSource>> {
    prop::collection::vec(prop::collection::vec(arb_record(), 0..12), 1..4).prop_map(|sets| {
        sets.into_iter()
            .enumerate()
            .map(|(i, records)| LoadedSource {
                name: format!("source-{i}.json"),
                location: Some(format!("/tmp/source-{i}.json").into()),
                records,
            })
            .collect()
    })
}

fn arb_skill() -> impl Strategy<Value = Skill> {
    ("[a-z]{1,8}", 0.0f64..100.0, prop_oneof![Just("A"), Just("B"), Just("C")]).prop_map(
        |(name, composite, grade)| {
            let mut skill = Skill::with_defaults(name, &InstallTemplate::default());
            skill.composite_score = Score::new(composite);
            skill.grade = grade.to_string();
            skill
        },
    )
}

proptest! {
    #[test]
    fn prop_catalog_names_are_unique(sources in arb_sources()) {
        let normalizer = Normalizer::new(InstallTemplate::default());
        let (catalog, _) = Catalog::aggregate(&sources, &normalizer);
        let names: Vec<&str> = catalog.names().collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        prop_assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn prop_first_sighting_wins(sources in arb_sources()) {
        let normalizer = Normalizer::new(InstallTemplate::default());
        let (catalog, report) = Catalog::aggregate(&sources, &normalizer);

        let mut expected: Vec<String> = Vec::new();
        for record in sources.iter().flat_map(|s| s.records.iter()) {
            let name = record["name"].as_str().unwrap().to_string();
            if !expected.contains(&name) {
                expected.push(name);
            }
        }
        let names: Vec<String> = catalog.names().map(str::to_string).collect();
        prop_assert_eq!(names, expected);
        prop_assert_eq!(
            report.total_read(),
            report.total_accepted() + report.total_duplicates() + report.total_invalid()
        );
    }

    #[test]
    fn prop_aggregation_is_idempotent(sources in arb_sources()) {
        let normalizer = Normalizer::new(InstallTemplate::default());
        let (first, first_report) = Catalog::aggregate(&sources, &normalizer);
        let (second, second_report) = Catalog::aggregate(&sources, &normalizer);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_report, second_report);
    }

    #[test]
    fn prop_classify_is_deterministic_and_known(name in ".{0,20}", description in ".{0,60}") {
        let first = classify(&name, &description);
        prop_assert_eq!(first, classify(&name, &description));
        prop_assert!(first == GENERAL || TAXONOMY.iter().any(|rule| rule.name == first));
    }

    #[test]
    fn prop_groups_partition_skills(skills in prop::collection::vec(arb_skill(), 0..20)) {
        let groups = group_by_category(&skills);
        let grouped: usize = groups.iter().map(|g| g.skills.len()).sum();
        prop_assert_eq!(grouped, skills.len());
    }

    #[test]
    fn prop_sort_is_descending_and_stable(skills in prop::collection::vec(arb_skill(), 0..20)) {
        let sorted = sort_by_composite(&skills);
        prop_assert_eq!(sorted.len(), skills.len());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.composite_score.value() >= b.composite_score.value());
            if a.composite_score.value() == b.composite_score.value() {
                let ia = skills.iter().position(|s| std::ptr::eq(s, a)).unwrap();
                let ib = skills.iter().position(|s| std::ptr::eq(s, b)).unwrap();
                prop_assert!(ia < ib);
            }
        }
    }

    #[test]
    fn prop_browse_is_subset_of_search(
        skills in prop::collection::vec(arb_skill(), 0..20),
        query in "[a-z]{0,2}",
    ) {
        let matched = search(&skills, &query);
        let browsed = browse(&skills, BrowseFilter::GradeA, &query);
        prop_assert!(browsed.iter().all(|s| s.grade == "A"));
        prop_assert!(browsed.len() <= matched.len());
    }
}
