//! Domain models for strava-gears
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Activity`] - A recorded exercise session
//! - [`Gear`] - A bike or pair of shoes owned by the athlete
//! - [`Athlete`] - The authenticated Strava user
//! - [`Rule`] - "When an activity looks like this, use that gear"

mod activity;
mod athlete;
mod gear;
mod rule;

pub use activity::Activity;
pub use athlete::Athlete;
pub use gear::{Gear, GearKind};
pub use rule::{Condition, Predicate, Rule};
