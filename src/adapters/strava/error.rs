//! Errors returned by the Strava adapters

use reqwest::blocking::Response;
use serde::Deserialize;

/// Errors talking to Strava
#[derive(Debug, thiserror::Error)]
pub enum StravaError {
    /// Transport failure or undecodable response
    #[error("request to Strava failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The access token is missing, expired or revoked
    #[error("Strava rejected the access token: {message}")]
    Unauthorized {
        /// Message from Strava
        message: String,
    },

    /// Any other non-success response
    #[error("Strava API returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from Strava, or the raw body
        message: String,
    },

    /// The OAuth flow did not produce a usable code
    #[error("authorization failed: {0}")]
    Authorization(String),

    /// A configured URL could not be parsed
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The URL as configured
        url: String,
        /// Parser message
        message: String,
    },
}

/// Strava's error document
#[derive(Debug, Deserialize)]
struct Fault {
    message: String,
    #[serde(default)]
    errors: Vec<FaultDetail>,
}

#[derive(Debug, Deserialize)]
struct FaultDetail {
    #[serde(default)]
    resource: String,
    #[serde(default)]
    field: String,
    #[serde(default)]
    code: String,
}

impl StravaError {
    /// Whether re-authenticating could fix this error
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Turn a non-success response into an error
    pub(crate) fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().unwrap_or_default();
        let message = fault_message(&body);

        if status == reqwest::StatusCode::UNAUTHORIZED {
            Self::Unauthorized { message }
        } else {
            Self::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

/// Extract a readable message from a response body
fn fault_message(body: &str) -> String {
    match serde_json::from_str::<Fault>(body) {
        Ok(fault) => {
            let details: Vec<String> = fault
                .errors
                .iter()
                .map(|e| format!("{} {} {}", e.resource, e.field, e.code).trim().to_string())
                .filter(|d| !d.is_empty())
                .collect();
            if details.is_empty() {
                fault.message
            } else {
                format!("{} ({})", fault.message, details.join("; "))
            }
        },
        Err(_) if body.trim().is_empty() => "empty response".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
