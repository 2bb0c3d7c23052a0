//! Assign gear to one activity

use anyhow::Context;

use strava_gears::config::ConfigStore;
use strava_gears::output::{OperationResult, OutputMode};

use super::session::authenticated_client;

/// Assign gear to a specific activity
pub fn assign(
    config: &mut ConfigStore,
    activity_id: u64,
    gear_id: &str,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let client = authenticated_client(config)?;
    client
        .update_activity_gear(activity_id, gear_id)
        .context("Error assigning gear")?;

    OperationResult::ok(format!("Successfully assigned gear {gear_id} to activity {activity_id}"))
        .render(output_mode);
    Ok(())
}
