//! Strava OAuth2 authorization code flow

use log::{debug, info};
use reqwest::Url;
use reqwest::blocking::Client;

use super::{CallbackListener, TokenSet, browser};
use crate::adapters::http::api_client;
use crate::adapters::strava::StravaError;

/// Strava authorization page
pub const DEFAULT_AUTH_URL: &str = "https://www.strava.com/oauth/authorize";

/// Strava token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://www.strava.com/oauth/token";

/// Environment variable overriding [`DEFAULT_AUTH_URL`]
pub const AUTH_URL_ENV: &str = "STRAVA_AUTH_URL";

/// Environment variable overriding [`DEFAULT_TOKEN_URL`]
pub const TOKEN_URL_ENV: &str = "STRAVA_TOKEN_URL";

/// Where the local callback listener waits
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000";

/// Requested scopes: profile for gear, activities for reading and updating
pub const SCOPES: &str = "read,profile:read_all,activity:read_all,activity:write";

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).ok().filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string())
}

/// OAuth client for one Strava application
#[derive(Debug, Clone)]
pub struct StravaAuth {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    auth_url: String,
    token_url: String,
    http: Client,
}

impl StravaAuth {
    /// Create an OAuth client using the default redirect URI
    ///
    /// Endpoint URLs come from the environment when set.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, StravaError> {
        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            auth_url: env_or(AUTH_URL_ENV, DEFAULT_AUTH_URL),
            token_url: env_or(TOKEN_URL_ENV, DEFAULT_TOKEN_URL),
            http: api_client()?,
        })
    }

    /// Use a different redirect URI
    #[must_use]
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = redirect_uri.into();
        self
    }

    /// Use different authorization and token endpoints
    #[must_use]
    pub fn with_endpoints(mut self, auth_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self.token_url = token_url.into();
        self
    }

    /// Redirect URI sent to Strava
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// URL the user visits to grant access
    pub fn authorization_url(&self) -> Result<String, StravaError> {
        let url = Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "code"),
                ("approval_prompt", "auto"),
                ("scope", SCOPES),
            ],
        )
        .map_err(|e| StravaError::InvalidUrl {
            url: self.auth_url.clone(),
            message: e.to_string(),
        })?;
        Ok(url.into())
    }

    /// Exchange an authorization code for tokens
    pub fn exchange_code(&self, code: &str) -> Result<TokenSet, StravaError> {
        debug!("Exchanging authorization code");
        self.request_tokens(&[("grant_type", "authorization_code"), ("code", code)])
    }

    /// Obtain a fresh access token
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenSet, StravaError> {
        debug!("Refreshing access token");
        self.request_tokens(&[("grant_type", "refresh_token"), ("refresh_token", refresh_token)])
    }

    /// Run the full browser flow
    ///
    /// Starts the callback listener, hands the authorization URL to `prompt`,
    /// opens it in the browser, waits for the redirect and exchanges the code.
    pub fn authorize_interactive(&self, prompt: impl FnOnce(&str)) -> Result<TokenSet, StravaError> {
        let listener = CallbackListener::for_redirect_uri(&self.redirect_uri)?;
        let url = self.authorization_url()?;

        prompt(&url);
        if !browser::open(&url) {
            info!("Open the URL above manually to continue");
        }

        let code = listener.wait_for_code()?;
        self.exchange_code(&code)
    }

    fn request_tokens(&self, grant: &[(&str, &str)]) -> Result<TokenSet, StravaError> {
        let mut form = vec![
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        form.extend_from_slice(grant);

        let response = self.http.post(&self.token_url).form(&form).send()?;
        if !response.status().is_success() {
            return Err(StravaError::from_response(response));
        }
        Ok(response.json()?)
    }
}
