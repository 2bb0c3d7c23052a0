//! List recent activities

use anyhow::Context;
use log::debug;

use strava_gears::config::ConfigStore;
use strava_gears::core::ports::ActivitySource;
use strava_gears::output::{ActivityListResult, ActivityRow, OutputMode};

use super::session::authenticated_client;

/// List recent activities with their gear
pub fn list_activities(
    config: &mut ConfigStore,
    limit: usize,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let client = authenticated_client(config)?;
    let activities = client.activities(limit).context("Error listing activities")?;

    // Gear names are cosmetic; without the profile scope fall back to IDs.
    let gear = client.gear().unwrap_or_else(|e| {
        debug!("Could not load gear names: {e:#}");
        Vec::new()
    });

    ActivityListResult {
        activities: activities.iter().map(|a| ActivityRow::new(a, &gear)).collect(),
    }
    .render(output_mode);
    Ok(())
}
