//! Strava OAuth2 adapter
//!
//! - [`auth`] - Authorization URL, code exchange and token refresh
//! - [`callback`] - One-shot local listener for the redirect
//! - [`browser`] - Open the authorization page
//! - [`tokens`] - The token set persisted between runs

pub mod auth;
pub mod browser;
pub mod callback;
pub mod tokens;

pub use auth::{
    AUTH_URL_ENV, DEFAULT_AUTH_URL, DEFAULT_REDIRECT_URI, DEFAULT_TOKEN_URL, SCOPES, StravaAuth,
    TOKEN_URL_ENV,
};
pub use callback::CallbackListener;
pub use tokens::TokenSet;
