//! Shared HTTP client configuration

use std::time::Duration;

use reqwest::blocking::Client;

/// Timeout applied to every request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for establishing a connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the blocking client used for all Strava traffic
pub fn api_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("strava-gears/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
}
