//! Tests for loading rules from TOML files

use std::fs;

use strava_gears::adapters::rules_file::{self, MatchKind, RulesFileError};
use tempfile::TempDir;

use super::common::*;

const RULES: &str = r#"
[[rules]]
name = "Commuter"
match = "name_pattern"
pattern = "commute"
gear_id = "b2"

[[rules]]
match = "activity_type"
activity_type = "Run"
gear_id = "g1"

[[rules]]
match = "distance"
min = 20000
gear_id = "b1"
"#;

#[test]
fn test_load_file_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(&path, RULES).unwrap();

    let file = rules_file::load_file(&path).unwrap();
    let kinds: Vec<_> = file.rules.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, [MatchKind::NamePattern, MatchKind::ActivityType, MatchKind::Distance]);

    let names: Vec<_> = file.to_rules().unwrap().iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, ["Commuter", "Type: Run", "Distance: 20000-inf"]);
}

#[test]
fn test_loaded_rules_resolve_gear() {
    let assigner = rules_file::parse_rules(RULES).unwrap().to_assigner().unwrap();

    assert_eq!(assigner.find_matching_gear(&named("Morning commute")), Some("b2"));
    assert_eq!(assigner.find_matching_gear(&activity_at("Run", 30_000.0)), Some("g1"));
    assert_eq!(assigner.find_matching_gear(&ride(30_000.0)), Some("b1"));
    assert_eq!(assigner.find_matching_gear(&ride(5_000.0)), None);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = rules_file::load_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, RulesFileError::Io { .. }));
}

#[test]
fn test_invalid_toml_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[rules]\nmatch = ").unwrap();

    let err = rules_file::load_file(&path).unwrap_err();
    assert!(matches!(err, RulesFileError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_missing_pattern_rejected() {
    let file = rules_file::parse_rules("[[rules]]\nmatch = \"name_pattern\"\ngear_id = \"b1\"\n").unwrap();
    let err = file.to_assigner().unwrap_err();
    assert!(err.to_string().contains("needs a pattern"));
}

#[test]
fn test_empty_gear_rejected() {
    let file =
        rules_file::parse_rules("[[rules]]\nmatch = \"activity_type\"\nactivity_type = \"Run\"\ngear_id = \"  \"\n")
            .unwrap();
    assert!(matches!(file.to_rules(), Err(RulesFileError::Invalid { index: 1, .. })));
}

#[test]
fn test_negative_bound_rejected() {
    let file = rules_file::parse_rules("[[rules]]\nmatch = \"distance\"\nmin = -1\ngear_id = \"g\"\n").unwrap();
    let err = file.to_rules().unwrap_err();
    assert!(err.to_string().contains("negative"));
}

#[test]
fn test_missing_gear_id_is_parse_error() {
    assert!(rules_file::parse_rules("[[rules]]\nmatch = \"distance\"\n").is_err());
}
