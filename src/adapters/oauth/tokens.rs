//! OAuth token set

use serde::{Deserialize, Serialize};

/// Seconds before expiry at which a token is treated as expired
pub const REFRESH_LEEWAY_SECS: i64 = 60;

/// Tokens returned by Strava's token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    /// Bearer token for API calls
    pub access_token: String,
    /// Token used to obtain a new access token
    pub refresh_token: String,
    /// Access token expiry, seconds since the Unix epoch
    pub expires_at: i64,
}

impl TokenSet {
    /// Whether the access token expires within [`REFRESH_LEEWAY_SECS`] of `now`
    #[must_use]
    pub const fn needs_refresh(&self, now: i64) -> bool {
        self.expires_at.saturating_sub(REFRESH_LEEWAY_SECS) <= now
    }
}
