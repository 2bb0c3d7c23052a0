//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `strava/` - Strava REST API client ([`ActivitySource`](crate::core::ports::ActivitySource))
//! - `oauth/` - Authorization code flow and token refresh
//! - `rules_file` - `rules.toml` parsing
//! - `http` - Shared blocking HTTP client setup

pub mod http;
pub mod oauth;
pub mod rules_file;
pub mod strava;
