//! Gear model
//!
//! Equipment the athlete owns and can attach to activities.

use serde::{Deserialize, Serialize};

/// Kind of gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearKind {
    /// A bicycle
    Bike,
    /// A pair of shoes
    Shoes,
}

impl std::fmt::Display for GearKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bike => write!(f, "Bike"),
            Self::Shoes => write!(f, "Shoes"),
        }
    }
}

/// A piece of gear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    /// Strava gear ID (e.g. "b1234" or "g5678")
    pub id: String,
    /// Display name
    pub name: String,
    /// Bike or shoes
    pub kind: GearKind,
    /// Total distance logged on this gear, in meters
    pub distance: Option<f64>,
    /// Whether this is the athlete's default gear of its kind
    #[serde(default)]
    pub primary: bool,
}

impl Gear {
    /// Distance in kilometers, zero when unknown
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance.unwrap_or(0.0) / 1000.0
    }
}
