//! Athlete model

use serde::{Deserialize, Serialize};

/// The authenticated Strava athlete
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Athlete {
    /// Strava athlete ID
    pub id: u64,
    /// First name
    pub firstname: Option<String>,
    /// Last name
    pub lastname: Option<String>,
    /// Public username
    pub username: Option<String>,
}

impl Athlete {
    /// Full name for display, falling back to the username or ID
    #[must_use]
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if !parts.is_empty() {
            return parts.join(" ");
        }
        self.username.clone().unwrap_or_else(|| format!("athlete {}", self.id))
    }
}
