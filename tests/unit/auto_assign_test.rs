//! Tests for the auto-assign workflow against an in-memory source

use strava_gears::core::models::Rule;
use strava_gears::core::services::{AutoAssignOptions, GearAssigner, auto_assign};

use super::common::*;

fn run_rules() -> GearAssigner {
    [
        Rule::by_name_pattern("trail", "g2", None),
        Rule::by_activity_type("Run", "g1", None),
        Rule::by_activity_type("Ride", "b1", None),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_assigns_first_matching_gear() {
    let source = MockActivitySource::new(history());
    let report = auto_assign(&source, &run_rules(), AutoAssignOptions::default()).unwrap();

    assert_eq!(source.updates(), [(1, "b1".to_string()), (2, "g2".to_string()), (3, "g1".to_string())]);
    assert_eq!(report.scanned, 5);
    assert_eq!(report.already_assigned, 1);
    assert_eq!(report.matched(), 3);
    assert_eq!(report.assignments[1].rule, "Name contains: trail");
    assert_eq!(report.assignments[1].activity_name, "Trail Run");
    assert_eq!(source.gear_of(2).as_deref(), Some("g2"));
}

#[test]
fn test_skips_activity_already_carrying_gear() {
    let source = MockActivitySource::new(history());
    let mut assigner = GearAssigner::new();
    assigner.add_rule(Rule::by_activity_type("Ride", "b1", None));

    let report = auto_assign(&source, &assigner, AutoAssignOptions::default()).unwrap();

    assert_eq!(source.updates(), [(1, "b1".to_string())]);
    assert_eq!(report.already_assigned, 1);
}

#[test]
fn test_unmatched_activities_are_left_alone() {
    let source = MockActivitySource::new(history());
    let mut assigner = GearAssigner::new();
    assigner.add_rule(Rule::by_activity_type("Hike", "boots", None));

    let report = auto_assign(&source, &assigner, AutoAssignOptions::default()).unwrap();

    assert!(source.updates().is_empty());
    assert!(report.assignments.is_empty());
    assert_eq!(report.already_assigned, 0);
    assert_eq!(source.gear_of(5), None);
}

#[test]
fn test_dry_run_changes_nothing() {
    let source = MockActivitySource::new(history());
    let options = AutoAssignOptions {
        dry_run: true,
        ..AutoAssignOptions::default()
    };

    let report = auto_assign(&source, &run_rules(), options).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.matched(), 3);
    assert!(source.updates().is_empty());
    assert_eq!(source.gear_of(1), None);
}

#[test]
fn test_limit_bounds_scan() {
    let source = MockActivitySource::new(history());
    let options = AutoAssignOptions {
        limit: 2,
        dry_run: false,
    };

    let report = auto_assign(&source, &run_rules(), options).unwrap();

    assert_eq!(report.scanned, 2);
    assert_eq!(source.updates().len(), 2);
}

#[test]
fn test_failed_update_stops_the_pass() {
    let source = MockActivitySource::new(history()).failing_on(2);

    let err = auto_assign(&source, &run_rules(), AutoAssignOptions::default()).unwrap_err();

    assert!(format!("{err:#}").contains("Failed to update activity 2"));
    assert!(format!("{err:#}").contains("500"));
    assert_eq!(source.updates(), [(1, "b1".to_string())]);
    assert_eq!(source.gear_of(3), None);
}

#[test]
fn test_second_pass_is_a_no_op() {
    let source = MockActivitySource::new(history());
    auto_assign(&source, &run_rules(), AutoAssignOptions::default()).unwrap();

    let report = auto_assign(&source, &run_rules(), AutoAssignOptions::default()).unwrap();

    assert!(report.assignments.is_empty());
    assert_eq!(report.already_assigned, 4);
    assert_eq!(source.updates().len(), 3);
}

#[test]
fn test_default_options() {
    let options = AutoAssignOptions::default();
    assert_eq!(options.limit, 30);
    assert!(!options.dry_run);
}
