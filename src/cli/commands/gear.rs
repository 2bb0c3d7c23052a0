//! List the athlete's gear

use anyhow::Context;

use strava_gears::config::ConfigStore;
use strava_gears::core::ports::ActivitySource;
use strava_gears::output::{GearListResult, OutputMode};

use super::session::authenticated_client;

/// List available gear
pub fn list_gear(config: &mut ConfigStore, output_mode: OutputMode) -> anyhow::Result<()> {
    let client = authenticated_client(config)?;
    let gear = client.gear().context("Error listing gear")?;
    GearListResult { gear }.render(output_mode);
    Ok(())
}
