//! Status command - show authentication state

use strava_gears::config::ConfigStore;
use strava_gears::core::ports::ActivitySource;
use strava_gears::output::{AuthState, OutputMode, StatusResult};

use super::session::authenticated_client;

/// Check authentication status
///
/// API failures are reported, not returned, so this always exits cleanly.
pub fn status(config: &mut ConfigStore, output_mode: OutputMode) -> anyhow::Result<()> {
    let result = match config.client_credentials() {
        (Some(_), Some(_)) if config.access_token().is_none() => StatusResult {
            state: AuthState::NotAuthenticated,
            athlete: None,
            error: None,
        },
        (Some(_), Some(_)) => {
            match authenticated_client(config).and_then(|client| client.athlete()) {
                Ok(athlete) => StatusResult {
                    state: AuthState::Authenticated,
                    athlete: Some(athlete.display_name()),
                    error: None,
                },
                Err(e) => StatusResult {
                    state: AuthState::Error,
                    athlete: None,
                    error: Some(format!("{e:#}")),
                },
            }
        },
        _ => StatusResult {
            state: AuthState::NotConfigured,
            athlete: None,
            error: None,
        },
    };

    result.render(output_mode);
    Ok(())
}
