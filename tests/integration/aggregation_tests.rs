//! Source discovery, normalization and merge across real files

use serde_json::json;

use skillhub::registry::Catalog;
use skillhub::test_utils::{SourceDirFixture, record, scored_record};

#[test]
fn test_first_source_wins_on_duplicates() {
    let fixture = SourceDirFixture::new();
    fixture.write_source(
        "registry.json",
        &json!([record("weather-api", "from registry"), record("git-sync", "mirrors repos")]),
    );
    fixture.write_source(
        "curated_seeds.json",
        &json!([record("weather-api", "from seeds"), record("slack-notify", "posts messages")]),
    );

    let (catalog, report) = fixture.registry().load_with_report();
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, ["weather-api", "git-sync", "slack-notify"]);
    assert_eq!(
        catalog.get("weather-api").unwrap().description.as_deref(),
        Some("from registry")
    );
    assert_eq!(report.total_read(), 4);
    assert_eq!(report.total_duplicates(), 1);
}

#[test]
fn test_fallback_dir_used_per_source() {
    let fixture = SourceDirFixture::new();
    fixture.write_source("registry.json", &json!([record("alpha", "")]));
    fixture.write_fallback("registry.json", &json!([record("shadowed", "")]));
    fixture.write_fallback("skills.json", &json!([record("beta", "")]));

    let (catalog, report) = fixture.registry().load_with_report();
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, ["alpha", "beta"]);
    assert_eq!(report.sources[0].location.as_deref(), Some(fixture.primary.join("registry.json").as_path()));
    assert_eq!(report.sources[1].location.as_deref(), Some(fixture.fallback.join("skills.json").as_path()));
    assert!(report.sources[2].location.is_none());
}

#[test]
fn test_malformed_primary_falls_back() {
    let fixture = SourceDirFixture::new();
    fixture.write_raw("registry.json", "{ not json");
    fixture.write_fallback("registry.json", &json!([record("gamma", "ok")]));

    let catalog = fixture.registry().load();
    assert_eq!(catalog.names().collect::<Vec<_>>(), ["gamma"]);
}

#[test]
fn test_missing_everything_is_empty_catalog() {
    let fixture = SourceDirFixture::new();
    let (catalog, report) = fixture.registry().load_with_report();
    assert!(catalog.is_empty());
    assert_eq!(report.sources.len(), 3);
    assert!(report.sources.iter().all(|s| s.location.is_none()));
}

#[test]
fn test_invalid_records_are_skipped() {
    let fixture = SourceDirFixture::new();
    fixture.write_source(
        "registry.json",
        &json!([
            {"description": "nameless"},
            {"name": "   "},
            "not an object",
            {"slug": "from-slug"},
        ]),
    );

    let (catalog, report) = fixture.registry().load_with_report();
    assert_eq!(catalog.names().collect::<Vec<_>>(), ["from-slug"]);
    assert_eq!(report.total_invalid(), 3);
}

#[test]
fn test_unchanged_sources_aggregate_identically() {
    let fixture = SourceDirFixture::new();
    fixture.write_source(
        "registry.json",
        &json!([scored_record("weather-api", "A", "featured", 91.0), record("git-sync", "mirrors repos")]),
    );
    fixture.write_fallback(
        "curated_seeds.json",
        &json!([record("weather-api", "later copy"), {"slug": "csv-tools"}, {"summary": "nameless"}]),
    );

    let registry = fixture.registry();
    let (first, first_report) = registry.load_with_report();
    let (second, second_report) = registry.load_with_report();

    assert_eq!(first, second);
    assert_eq!(
        first.names().collect::<Vec<_>>(),
        second.names().collect::<Vec<_>>()
    );
    assert_eq!(first_report, second_report);
    assert_eq!(first, fixture.registry().load());
}

#[test]
fn test_sources_reread_on_every_load() {
    let fixture = SourceDirFixture::new();
    let registry = fixture.registry();
    assert!(registry.load().is_empty());

    fixture.write_source("skills.json", &json!([scored_record("late", "A", "featured", 99.0)]));
    let catalog = registry.load();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("late").unwrap().composite_score.value(), 99.0);
}

#[test]
fn test_catalog_serializes_as_array() {
    let fixture = SourceDirFixture::new();
    fixture.write_source("registry.json", &json!([record("one", "first")]));

    let catalog: Catalog = fixture.registry().load();
    let value = serde_json::to_value(&catalog).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["name"], "one");
    assert_eq!(value[0]["install_cmd"], "clawhub install one");
}
