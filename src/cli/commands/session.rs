//! Authenticated client construction shared by API commands

use anyhow::Context;
use log::{info, warn};

use strava_gears::adapters::oauth::StravaAuth;
use strava_gears::adapters::strava::StravaClient;
use strava_gears::config::ConfigStore;

/// Message shown when no access token is stored
pub const NOT_AUTHENTICATED: &str = "Not authenticated. Run 'strava-gears auth' first.";

/// Build a client from stored tokens, refreshing them first if they expire soon
pub fn authenticated_client(config: &mut ConfigStore) -> anyhow::Result<StravaClient> {
    let mut tokens = config.tokens().context(NOT_AUTHENTICATED)?;

    if tokens.needs_refresh(chrono::Utc::now().timestamp()) {
        let (client_id, client_secret) = config.client_credentials();
        match (client_id, client_secret) {
            (Some(id), Some(secret)) if !tokens.refresh_token.is_empty() => {
                info!("Access token expired, refreshing");
                let auth = StravaAuth::new(id, secret)?;
                tokens = auth
                    .refresh(&tokens.refresh_token)
                    .context("Failed to refresh access token. Run 'strava-gears auth' again.")?;
                config.set_tokens(&tokens)?;
            },
            _ => warn!("Access token expired and cannot be refreshed; trying it anyway"),
        }
    }

    Ok(StravaClient::new(tokens.access_token)?)
}
