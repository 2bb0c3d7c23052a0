//! Auto-assign workflow
//!
//! Fetches recent activities, asks the assigner for a gear ID per activity and
//! writes the result back through the activity source.

use anyhow::Context;
use log::{debug, info};
use serde::Serialize;

use super::GearAssigner;
use crate::core::ports::ActivitySource;

/// Options for an auto-assign pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAssignOptions {
    /// Number of recent activities to scan
    pub limit: usize,
    /// Report what would change without calling the API
    pub dry_run: bool,
}

impl Default for AutoAssignOptions {
    fn default() -> Self {
        Self {
            limit: 30,
            dry_run: false,
        }
    }
}

/// One activity that received (or would receive) gear
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentOutcome {
    /// Activity ID
    pub activity_id: u64,
    /// Activity name, empty when the activity has none
    pub activity_name: String,
    /// Gear that was applied
    pub gear_id: String,
    /// Name of the rule that selected the gear
    pub rule: String,
}

/// Summary of an auto-assign pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoAssignReport {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Activities fetched
    pub scanned: usize,
    /// Activities skipped because they already carry the matched gear
    pub already_assigned: usize,
    /// Activities updated (or that would be updated)
    pub assignments: Vec<AssignmentOutcome>,
}

impl AutoAssignReport {
    /// Number of activities updated (or that would be updated)
    #[must_use]
    pub fn matched(&self) -> usize {
        self.assignments.len()
    }
}

/// Apply the assigner to the most recent activities
///
/// An activity is skipped when the gear its matching rule selects is already
/// assigned to it. Activities that carry other gear are reassigned.
///
/// The pass stops at the first failed update; updates made before it stay.
pub fn auto_assign(
    source: &dyn ActivitySource,
    assigner: &GearAssigner,
    options: AutoAssignOptions,
) -> anyhow::Result<AutoAssignReport> {
    let activities = source
        .activities(options.limit)
        .context("Failed to fetch activities")?;
    debug!("Scanning {} activities against {} rule(s)", activities.len(), assigner.len());

    let mut report = AutoAssignReport {
        dry_run: options.dry_run,
        scanned: activities.len(),
        already_assigned: 0,
        assignments: Vec::new(),
    };

    for activity in &activities {
        let Some(rule) = assigner.find_matching_rule(activity) else {
            continue;
        };

        if activity.has_gear(rule.gear_id()) {
            report.already_assigned += 1;
            continue;
        }

        if !options.dry_run {
            source
                .update_activity_gear(activity.id, rule.gear_id())
                .with_context(|| format!("Failed to update activity {}", activity.id))?;
            info!("Assigned gear {} to activity {} ({})", rule.gear_id(), activity.id, rule.name());
        }

        report.assignments.push(AssignmentOutcome {
            activity_id: activity.id,
            activity_name: activity.name_or_empty().to_string(),
            gear_id: rule.gear_id().to_string(),
            rule: rule.name().to_string(),
        });
    }

    Ok(report)
}
