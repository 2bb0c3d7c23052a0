//! Mock implementation of the activity source port
//!
//! Keeps activities in memory and records every gear update.

use std::cell::RefCell;

use strava_gears::core::models::{Activity, Athlete, Gear, GearKind};
use strava_gears::core::ports::ActivitySource;

/// In-memory activity source
pub struct MockActivitySource {
    activities: RefCell<Vec<Activity>>,
    updates: RefCell<Vec<(u64, String)>>,
    fail_on: Option<u64>,
}

impl MockActivitySource {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RefCell::new(activities),
            updates: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Make updates to this activity fail
    pub fn failing_on(mut self, activity_id: u64) -> Self {
        self.fail_on = Some(activity_id);
        self
    }

    /// Updates made so far, in order
    pub fn updates(&self) -> Vec<(u64, String)> {
        self.updates.borrow().clone()
    }

    /// Current gear of an activity
    pub fn gear_of(&self, activity_id: u64) -> Option<String> {
        self.activities
            .borrow()
            .iter()
            .find(|a| a.id == activity_id)
            .and_then(|a| a.gear_id.clone())
    }
}

impl ActivitySource for MockActivitySource {
    fn athlete(&self) -> anyhow::Result<Athlete> {
        Ok(Athlete {
            id: 42,
            firstname: Some("Ada".to_string()),
            lastname: Some("Lovelace".to_string()),
            username: None,
        })
    }

    fn activities(&self, limit: usize) -> anyhow::Result<Vec<Activity>> {
        Ok(self.activities.borrow().iter().take(limit).cloned().collect())
    }

    fn gear(&self) -> anyhow::Result<Vec<Gear>> {
        Ok(vec![
            Gear {
                id: "b1".to_string(),
                name: "Road Bike".to_string(),
                kind: GearKind::Bike,
                distance: None,
                primary: true,
            },
            Gear {
                id: "g1".to_string(),
                name: "Trail Shoes".to_string(),
                kind: GearKind::Shoes,
                distance: None,
                primary: false,
            },
        ])
    }

    fn update_activity_gear(&self, activity_id: u64, gear_id: &str) -> anyhow::Result<Activity> {
        if self.fail_on == Some(activity_id) {
            anyhow::bail!("Strava API returned 500: Internal Server Error");
        }

        let mut activities = self.activities.borrow_mut();
        let activity = activities
            .iter_mut()
            .find(|a| a.id == activity_id)
            .ok_or_else(|| anyhow::anyhow!("no activity {activity_id}"))?;
        activity.gear_id = Some(gear_id.to_string());
        self.updates.borrow_mut().push((activity_id, gear_id.to_string()));
        Ok(activity.clone())
    }
}
