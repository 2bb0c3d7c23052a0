//! Strava API adapter
//!
//! Implements [`ActivitySource`](crate::core::ports::ActivitySource) against
//! the Strava v3 REST API.
//!
//! - [`client`] - Blocking API client
//! - [`dto`] - Wire types and their conversion into domain models
//! - [`error`] - Error type shared with the OAuth adapter

pub mod client;
pub mod dto;
pub mod error;

pub use client::{API_BASE_ENV, DEFAULT_API_BASE, StravaClient, api_base_url};
pub use error::StravaError;
