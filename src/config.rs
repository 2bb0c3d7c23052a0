//! Configuration and token storage
//!
//! Two flat JSON objects live in the config directory: `config.json` for
//! settings such as client credentials, and `tokens.json` for the OAuth token
//! set. Every `set` writes the affected file straight back to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::adapters::oauth::TokenSet;
use crate::paths;

/// Environment variable overriding the stored client ID
pub const CLIENT_ID_ENV: &str = "STRAVA_CLIENT_ID";

/// Environment variable overriding the stored client secret
pub const CLIENT_SECRET_ENV: &str = "STRAVA_CLIENT_SECRET";

const CLIENT_ID_KEY: &str = "client_id";
const CLIENT_SECRET_KEY: &str = "client_secret";
const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const EXPIRES_AT_KEY: &str = "expires_at";

/// Errors reading or writing configuration files
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Filesystem failure
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// File exists but is not a JSON object
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// Result alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings and tokens backed by JSON files
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
    config: Map<String, Value>,
    tokens: Map<String, Value>,
}

impl ConfigStore {
    /// Load from the default config directory (see [`paths::config_dir`])
    pub fn load_default() -> Result<Self> {
        Self::load(paths::config_dir())
    }

    /// Load from `dir`, creating it if missing
    ///
    /// Missing files load as empty objects.
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ConfigError::Io {
            path: dir.clone(),
            source,
        })?;

        let config = read_map(&paths::config_file(&dir))?;
        let tokens = read_map(&paths::token_file(&dir))?;
        Ok(Self {
            dir,
            config,
            tokens,
        })
    }

    /// Directory the files live in
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get a configuration value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    /// Get a configuration value as a string
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Set a configuration value and save `config.json`
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.config.insert(key.to_string(), value.into());
        self.save_config()
    }

    /// Get a token value
    #[must_use]
    pub fn get_token(&self, key: &str) -> Option<&Value> {
        self.tokens.get(key)
    }

    /// Set a token value and save `tokens.json`
    pub fn set_token(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.tokens.insert(key.to_string(), value.into());
        self.save_tokens()
    }

    /// Client ID and secret, environment variables first
    #[must_use]
    pub fn client_credentials(&self) -> (Option<String>, Option<String>) {
        let from_env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        let client_id =
            from_env(CLIENT_ID_ENV).or_else(|| self.get_str(CLIENT_ID_KEY).map(String::from));
        let client_secret = from_env(CLIENT_SECRET_ENV)
            .or_else(|| self.get_str(CLIENT_SECRET_KEY).map(String::from));
        (client_id, client_secret)
    }

    /// Store client credentials in `config.json`
    pub fn set_client_credentials(&mut self, client_id: &str, client_secret: &str) -> Result<()> {
        self.config.insert(CLIENT_ID_KEY.to_string(), client_id.into());
        self.config.insert(CLIENT_SECRET_KEY.to_string(), client_secret.into());
        self.save_config()
    }

    /// Stored access token
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.get_token(ACCESS_TOKEN_KEY).and_then(Value::as_str)
    }

    /// Stored refresh token
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.get_token(REFRESH_TOKEN_KEY).and_then(Value::as_str)
    }

    /// Access token expiry as seconds since the Unix epoch
    #[must_use]
    pub fn expires_at(&self) -> Option<i64> {
        self.get_token(EXPIRES_AT_KEY).and_then(Value::as_i64)
    }

    /// The stored token set, if an access token is present
    #[must_use]
    pub fn tokens(&self) -> Option<TokenSet> {
        Some(TokenSet {
            access_token: self.access_token()?.to_string(),
            refresh_token: self.refresh_token().unwrap_or_default().to_string(),
            expires_at: self.expires_at().unwrap_or_default(),
        })
    }

    /// Replace the stored token set
    pub fn set_tokens(&mut self, tokens: &TokenSet) -> Result<()> {
        self.tokens.insert(ACCESS_TOKEN_KEY.to_string(), tokens.access_token.clone().into());
        self.tokens.insert(REFRESH_TOKEN_KEY.to_string(), tokens.refresh_token.clone().into());
        self.tokens.insert(EXPIRES_AT_KEY.to_string(), tokens.expires_at.into());
        self.save_tokens()
    }

    /// Forget all stored tokens
    pub fn clear_tokens(&mut self) -> Result<()> {
        self.tokens.clear();
        self.save_tokens()
    }

    fn save_config(&self) -> Result<()> {
        write_map(&paths::config_file(&self.dir), &self.config, false)
    }

    fn save_tokens(&self) -> Result<()> {
        write_map(&paths::token_file(&self.dir), &self.tokens, true)
    }
}

fn read_map(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_map(path: &Path, map: &Map<String, Value>, private: bool) -> Result<()> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let content = serde_json::to_string_pretty(map).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    open_for_write(path, private)
        .and_then(|mut file| io::Write::write_all(&mut file, content.as_bytes()))
        .map_err(io_err)
}

#[cfg(unix)]
fn open_for_write(path: &Path, private: bool) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    if private {
        options.mode(0o600);
    }
    options.open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path, _private: bool) -> io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)
}
