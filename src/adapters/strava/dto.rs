//! Strava wire types
//!
//! Only the fields gear assignment needs are decoded; everything else in the
//! response is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{Activity, Athlete, Gear, GearKind};

/// `SummaryActivity` / `DetailedActivity`
#[derive(Debug, Clone, Deserialize)]
pub struct StravaActivity {
    /// Activity ID
    pub id: u64,
    /// Title
    #[serde(default)]
    pub name: Option<String>,
    /// Legacy activity type ("Ride", "Run", ...)
    #[serde(rename = "type", default)]
    pub activity_type: String,
    /// Sport type ("`MountainBikeRide`", ...)
    #[serde(default)]
    pub sport_type: Option<String>,
    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Assigned gear
    #[serde(default)]
    pub gear_id: Option<String>,
    /// Start time
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
}

impl From<StravaActivity> for Activity {
    fn from(strava: StravaActivity) -> Self {
        // Records without the legacy type still carry a sport type.
        let activity_type = if strava.activity_type.is_empty() {
            strava.sport_type.clone().unwrap_or_default()
        } else {
            strava.activity_type
        };

        Self {
            id: strava.id,
            name: strava.name,
            activity_type,
            sport_type: strava.sport_type,
            distance: strava.distance,
            gear_id: strava.gear_id.filter(|g| !g.is_empty()),
            start_date: strava.start_date,
        }
    }
}

/// `SummaryGear`
#[derive(Debug, Clone, Deserialize)]
pub struct StravaGear {
    /// Gear ID
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Nickname set by the athlete
    #[serde(default)]
    pub nickname: Option<String>,
    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Default gear for its kind
    #[serde(default)]
    pub primary: bool,
}

impl StravaGear {
    /// Convert into a domain [`Gear`] of the given kind
    #[must_use]
    pub fn into_gear(self, kind: GearKind) -> Gear {
        let name = self
            .nickname
            .filter(|n| !n.is_empty())
            .or(self.name)
            .unwrap_or_else(|| self.id.clone());
        Gear {
            id: self.id,
            name,
            kind,
            distance: self.distance,
            primary: self.primary,
        }
    }
}

/// `DetailedAthlete` (the parts we use)
#[derive(Debug, Clone, Deserialize)]
pub struct StravaAthlete {
    /// Athlete ID
    pub id: u64,
    /// Username
    #[serde(default)]
    pub username: Option<String>,
    /// First name
    #[serde(default)]
    pub firstname: Option<String>,
    /// Last name
    #[serde(default)]
    pub lastname: Option<String>,
    /// Bikes, present with the `profile:read_all` scope
    #[serde(default)]
    pub bikes: Option<Vec<StravaGear>>,
    /// Shoes, present with the `profile:read_all` scope
    #[serde(default)]
    pub shoes: Option<Vec<StravaGear>>,
}

impl StravaAthlete {
    /// Bikes followed by shoes
    #[must_use]
    pub fn gear(&self) -> Vec<Gear> {
        let bikes = self.bikes.iter().flatten().map(|g| g.clone().into_gear(GearKind::Bike));
        let shoes = self.shoes.iter().flatten().map(|g| g.clone().into_gear(GearKind::Shoes));
        bikes.chain(shoes).collect()
    }
}

impl From<&StravaAthlete> for Athlete {
    fn from(strava: &StravaAthlete) -> Self {
        Self {
            id: strava.id,
            firstname: strava.firstname.clone(),
            lastname: strava.lastname.clone(),
            username: strava.username.clone(),
        }
    }
}

/// Body of `PUT /activities/{id}`
#[derive(Debug, Serialize)]
pub struct UpdatableActivity<'a> {
    /// Gear to assign
    pub gear_id: &'a str,
}
