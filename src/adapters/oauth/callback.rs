//! One-shot OAuth callback listener
//!
//! Binds the redirect URI's address with `tiny_http` and blocks until the
//! browser comes back with either an authorization code or an error.

use std::fmt;

use log::debug;
use reqwest::Url;
use tiny_http::{Header, Response, Server};

use crate::adapters::strava::StravaError;

const SUCCESS_HTML: &str = "<html><body><h1>Authentication successful!</h1>\
                            <p>You can close this window.</p></body></html>";

const FAILURE_HTML: &str = "<html><body><h1>Authentication failed</h1>\
                            <p>Return to the terminal for details.</p></body></html>";

/// What a request to the listener carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// `?code=...`
    Code(String),
    /// `?error=...`, e.g. `access_denied`
    Denied(String),
    /// Anything else (favicon, stray requests)
    Ignored,
}

/// Classify a request target such as `/?state=&code=abc&scope=read`
#[must_use]
pub fn parse_callback(target: &str) -> CallbackOutcome {
    let Ok(url) = Url::parse("http://localhost").and_then(|base| base.join(target)) else {
        return CallbackOutcome::Ignored;
    };

    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" if !value.is_empty() => return CallbackOutcome::Code(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {},
        }
    }
    error.map_or(CallbackOutcome::Ignored, CallbackOutcome::Denied)
}

/// Local HTTP listener for the OAuth redirect
pub struct CallbackListener {
    server: Server,
}

impl fmt::Debug for CallbackListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackListener").field("port", &self.port()).finish()
    }
}

impl CallbackListener {
    /// Listen on `addr` (e.g. `127.0.0.1:8000`; port 0 picks a free port)
    pub fn bind(addr: &str) -> Result<Self, StravaError> {
        let server = Server::http(addr).map_err(|e| {
            StravaError::Authorization(format!("cannot listen on {addr} for the callback: {e}"))
        })?;
        debug!("Callback listener bound to {addr}");
        Ok(Self { server })
    }

    /// Listen on the host and port of a redirect URI
    pub fn for_redirect_uri(redirect_uri: &str) -> Result<Self, StravaError> {
        let url = Url::parse(redirect_uri).map_err(|e| StravaError::InvalidUrl {
            url: redirect_uri.to_string(),
            message: e.to_string(),
        })?;
        let host = url.host_str().unwrap_or("localhost");
        let port = url.port_or_known_default().unwrap_or(80);
        Self::bind(&format!("{host}:{port}"))
    }

    /// Port actually bound
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.server.server_addr().to_ip().map(|addr| addr.port())
    }

    /// Block until a request carries a code or an error
    ///
    /// Requests carrying neither are answered with 404 and ignored.
    pub fn wait_for_code(self) -> Result<String, StravaError> {
        for request in self.server.incoming_requests() {
            let outcome = parse_callback(request.url());
            debug!("Callback request {} -> {outcome:?}", request.url());

            let (status, body) = match &outcome {
                CallbackOutcome::Code(_) => (200, SUCCESS_HTML),
                CallbackOutcome::Denied(_) => (400, FAILURE_HTML),
                CallbackOutcome::Ignored => (404, "Not Found"),
            };
            let mut response = Response::from_string(body).with_status_code(status);
            if status != 404
                && let Ok(header) = Header::from_bytes("Content-Type", "text/html; charset=utf-8")
            {
                response = response.with_header(header);
            }
            if let Err(e) = request.respond(response) {
                debug!("Failed to answer callback request: {e}");
            }

            match outcome {
                CallbackOutcome::Code(code) => return Ok(code),
                CallbackOutcome::Denied(reason) => {
                    return Err(StravaError::Authorization(format!(
                        "authorization was denied ({reason})"
                    )));
                },
                CallbackOutcome::Ignored => {},
            }
        }

        Err(StravaError::Authorization(
            "callback listener stopped before an authorization code arrived".to_string(),
        ))
    }
}
