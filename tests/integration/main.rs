//! Integration tests for the strava-gears CLI
//!
//! Every test gets its own config directory and its own fake Strava server,
//! so the binary never talks to the real API.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;


use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use common::{FAR_FUTURE, MockStrava};

/// Helper function to create a strava-gears command isolated from the host
fn strava_gears(config_dir: &Path, mock: &MockStrava) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("strava-gears"));
    cmd.env("STRAVA_GEARS_CONFIG_DIR", config_dir)
        .env("STRAVA_API_BASE", mock.api_base())
        .env("STRAVA_TOKEN_URL", mock.token_url())
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env("NO_COLOR", "1")
        .env_remove("STRAVA_CLIENT_ID")
        .env_remove("STRAVA_CLIENT_SECRET")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("HTTPS_PROXY")
        .env_remove("https_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("RUST_LOG");
    cmd
}

/// Store client credentials
fn configure(dir: &Path) {
    fs::write(
        dir.join("config.json"),
        json!({"client_id": "12345", "client_secret": "secret"}).to_string(),
    )
    .unwrap();
}

/// Store a token set expiring at `expires_at`
fn authenticate(dir: &Path, expires_at: i64) {
    fs::write(
        dir.join("tokens.json"),
        json!({
            "access_token": "token-123",
            "refresh_token": "refresh-1",
            "expires_at": expires_at
        })
        .to_string(),
    )
    .unwrap();
}

/// A configured, authenticated config directory
fn logged_in() -> TempDir {
    let dir = TempDir::new().unwrap();
    configure(dir.path());
    authenticate(dir.path(), FAR_FUTURE);
    dir
}

// =============================================================================
// Version and help
// =============================================================================

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("strava-gears v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_json() {
    let dir = TempDir::new().unwrap();
    let mock = MockStrava::strava();
    let output = strava_gears(dir.path(), &mock)
        .args(["--json", "version"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let version: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .assert()
        .success()
        .stdout(predicate::str::contains("strava-gears auth"));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("auto-assign"))
        .stdout(predicate::str::contains("list-activities"));
}

// =============================================================================
// Status
// =============================================================================

#[test]
fn test_status_not_configured() {
    let dir = TempDir::new().unwrap();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not configured"));
    assert!(mock.requests().is_empty());
}

#[test]
fn test_status_not_authenticated() {
    let dir = TempDir::new().unwrap();
    configure(dir.path());
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not authenticated"));
}

#[test]
fn test_status_uses_env_credentials() {
    let dir = TempDir::new().unwrap();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .env("STRAVA_CLIENT_ID", "999")
        .env("STRAVA_CLIENT_SECRET", "from-env")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not authenticated"));
}

#[test]
fn test_status_authenticated() {
    let dir = logged_in();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticated as: Ada Lovelace"));
}

#[test]
fn test_status_reports_rejected_token() {
    let dir = logged_in();
    let mock = MockStrava::unauthorized();
    strava_gears(dir.path(), &mock)
        .arg("status")
        .assert()
        .success()
        .stderr(predicate::str::contains("Authorization Error"))
        .stdout(predicate::str::contains("re-authenticate"));
}

#[test]
fn test_status_json() {
    let dir = logged_in();
    let mock = MockStrava::strava();
    let output = strava_gears(dir.path(), &mock)
        .args(["--json", "status"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let status: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(status["state"], "authenticated");
    assert_eq!(status["athlete"], "Ada Lovelace");
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_list_activities_requires_auth() {
    let dir = TempDir::new().unwrap();
    configure(dir.path());
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .arg("list-activities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not authenticated"));
    assert!(mock.requests().is_empty());
}

#[test]
fn test_list_activities() {
    let dir = logged_in();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .args(["list-activities", "--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 activities"))
        .stdout(predicate::str::contains("Morning Ride"))
        .stdout(predicate::str::contains("Distance: 25.00 km"))
        .stdout(predicate::str::contains("Gear: Trail Shoes"))
        .stdout(predicate::str::contains("Gear: No gear"))
        .stdout(predicate::str::contains("Commute").not());
}

#[test]
fn test_list_gear() {
    let dir = logged_in();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock)
        .arg("list-gear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Road Bike"))
        .stdout(predicate::str::contains("(primary)"))
        .stdout(predicate::str::contains("Type: Bike"))
        .stdout(predicate::str::contains("Type: Shoes"))
        .stdout(predicate::str::contains("Flats"));
}

#[test]
fn test_list_gear_with_rejected_token() {
    let dir = logged_in();
    let mock = MockStrava::unauthorized();
    strava_gears(dir.path(), &mock)
        .arg("list-gear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Strava rejected the access token"));
}

// =============================================================================
// Tokens
// =============================================================================

#[test]
fn test_expired_token_is_refreshed_and_saved() {
    let dir = TempDir::new().unwrap();
    configure(dir.path());
    authenticate(dir.path(), 0);
    let mock = MockStrava::strava();

    strava_gears(dir.path(), &mock).arg("list-gear").assert().success();

    let posts = mock.requests_with_method("POST");
    assert_eq!(posts.len(), 1);
    assert!(posts[0].body.contains("grant_type=refresh_token"));
    assert!(posts[0].body.contains("refresh_token=refresh-1"));

    let athlete_call = mock.requests().into_iter().find(|r| r.path() == "/api/v3/athlete").unwrap();
    assert_eq!(athlete_call.authorization.as_deref(), Some("Bearer refreshed-token"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("tokens.json")).unwrap()).unwrap();
    assert_eq!(saved["access_token"], "refreshed-token");
    assert_eq!(saved["refresh_token"], "refresh-2");
    assert_eq!(saved["expires_at"], FAR_FUTURE);
}

#[test]
fn test_fresh_token_is_not_refreshed() {
    let dir = logged_in();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock).arg("list-gear").assert().success();
    assert!(mock.requests_with_method("POST").is_empty());
}

#[test]
fn test_logout_forgets_tokens() {
    let dir = logged_in();
    let mock = MockStrava::strava();
    strava_gears(dir.path(), &mock).arg("logout").assert().success();

    strava_gears(dir.path(), &mock)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not authenticated"));
    assert!(mock.requests().is_empty());
}
