//! Activity source port
//!
//! Defines the interface for reading activities and gear and for writing
//! gear assignments back.

use super::super::models::{Activity, Athlete, Gear};

/// Remote source of activities and gear
///
/// Calls are blocking and made one at a time.
pub trait ActivitySource {
    /// Fetch the authenticated athlete
    fn athlete(&self) -> anyhow::Result<Athlete>;

    /// Fetch up to `limit` of the most recent activities, newest first
    fn activities(&self, limit: usize) -> anyhow::Result<Vec<Activity>>;

    /// Fetch all of the athlete's gear (bikes first, then shoes)
    fn gear(&self) -> anyhow::Result<Vec<Gear>>;

    /// Assign gear to an activity, returning the updated activity
    fn update_activity_gear(&self, activity_id: u64, gear_id: &str) -> anyhow::Result<Activity>;

    /// Look up a single piece of gear by ID
    fn find_gear(&self, gear_id: &str) -> anyhow::Result<Option<Gear>> {
        Ok(self.gear()?.into_iter().find(|g| g.id == gear_id))
    }
}
