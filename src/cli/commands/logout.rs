//! Forget stored tokens

use strava_gears::config::ConfigStore;
use strava_gears::output::{OperationResult, OutputMode};

/// Clear stored tokens, keeping client credentials
pub fn logout(config: &mut ConfigStore, output_mode: OutputMode) -> anyhow::Result<()> {
    let message = if config.access_token().is_some() {
        config.clear_tokens()?;
        "Logged out."
    } else {
        "Not logged in."
    };
    OperationResult::ok(message).render(output_mode);
    Ok(())
}
