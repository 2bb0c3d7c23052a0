//! Auth command - run the OAuth flow and store tokens

use std::io::{self, BufRead, Write};

use anyhow::Context;

use strava_gears::adapters::oauth::StravaAuth;
use strava_gears::config::ConfigStore;
use strava_gears::output::{OperationResult, OutputMode};

/// Authenticate with the Strava API
///
/// Credentials not given as flags come from the environment or the stored
/// config, and are prompted for otherwise.
pub fn auth(
    config: &mut ConfigStore,
    client_id: Option<String>,
    client_secret: Option<String>,
    port: u16,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let (stored_id, stored_secret) = config.client_credentials();
    let client_id = match client_id.or(stored_id) {
        Some(id) => id,
        None => prompt("Client ID")?,
    };
    let client_secret = match client_secret.or(stored_secret) {
        Some(secret) => secret,
        None => prompt("Client secret")?,
    };
    config.set_client_credentials(&client_id, &client_secret)?;

    let auth = StravaAuth::new(client_id, client_secret)?
        .with_redirect_uri(format!("http://localhost:{port}"));
    let tokens = auth
        .authorize_interactive(|url| {
            eprintln!("Opening browser for authentication: {url}");
            eprintln!("Waiting for authentication...");
        })
        .context("Authentication failed")?;
    config.set_tokens(&tokens)?;

    OperationResult::ok("Authentication successful!").render(output_mode);
    Ok(())
}

fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{label}: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let value = line.trim().to_string();
    if value.is_empty() {
        anyhow::bail!("{label} is required");
    }
    Ok(value)
}
