//! Activity model
//!
//! A single recorded exercise session, as far as gear assignment cares.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded activity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    pub id: u64,

    /// Activity title (may be missing on partial records)
    pub name: Option<String>,

    /// Category label, e.g. "Ride" or "Run"
    #[serde(rename = "type")]
    pub activity_type: String,

    /// Finer-grained sport label, e.g. "`GravelRide`"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_type: Option<String>,

    /// Distance in meters; `None` when unknown
    pub distance: Option<f64>,

    /// Gear currently assigned to this activity
    pub gear_id: Option<String>,

    /// When the activity started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

impl Activity {
    /// Create an activity with just an ID and a type
    #[must_use]
    pub fn new(id: u64, activity_type: impl Into<String>) -> Self {
        Self {
            id,
            activity_type: activity_type.into(),
            ..Self::default()
        }
    }

    /// Set the activity name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the distance in meters
    #[must_use]
    pub const fn with_distance(mut self, meters: f64) -> Self {
        self.distance = Some(meters);
        self
    }

    /// Set the currently assigned gear
    #[must_use]
    pub fn with_gear(mut self, gear_id: impl Into<String>) -> Self {
        self.gear_id = Some(gear_id.into());
        self
    }

    /// Name for matching and display, empty when absent
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Distance in kilometers, zero when unknown
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance.unwrap_or(0.0) / 1000.0
    }

    /// Whether `gear_id` is already assigned to this activity
    #[must_use]
    pub fn has_gear(&self, gear_id: &str) -> bool {
        self.gear_id.as_deref() == Some(gear_id)
    }
}
