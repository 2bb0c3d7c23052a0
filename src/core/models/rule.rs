//! Rule model
//!
//! A rule binds a named condition to the gear that should be applied when
//! the condition holds. Rules never change after construction.

use std::fmt;
use std::sync::Arc;

use super::Activity;

/// Caller-supplied predicate over an activity
pub type Predicate = dyn Fn(&Activity) -> bool + Send + Sync;

/// What a rule tests
#[derive(Clone)]
pub enum Condition {
    /// Activity type equals this label exactly (case-sensitive)
    ActivityType(String),

    /// Distance is known and within the inclusive bounds
    Distance {
        /// Lower bound in meters, unbounded when `None`
        min: Option<f64>,
        /// Upper bound in meters, unbounded when `None`
        max: Option<f64>,
    },

    /// Activity name contains this text, ignoring case
    NamePattern(String),

    /// Every inner condition holds
    All(Vec<Condition>),

    /// Arbitrary predicate
    Custom(Arc<Predicate>),
}

impl Condition {
    /// Evaluate this condition against an activity
    ///
    /// A panicking [`Condition::Custom`] predicate is not caught here.
    #[must_use]
    pub fn evaluate(&self, activity: &Activity) -> bool {
        match self {
            Self::ActivityType(activity_type) => activity.activity_type == *activity_type,
            Self::Distance { min, max } => {
                let Some(distance) = activity.distance else {
                    return false;
                };
                min.is_none_or(|min| distance >= min) && max.is_none_or(|max| distance <= max)
            },
            Self::NamePattern(pattern) => activity
                .name_or_empty()
                .to_lowercase()
                .contains(&pattern.to_lowercase()),
            Self::All(conditions) => conditions.iter().all(|c| c.evaluate(activity)),
            Self::Custom(predicate) => predicate(activity),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActivityType(activity_type) => {
                f.debug_tuple("ActivityType").field(activity_type).finish()
            },
            Self::Distance { min, max } => {
                f.debug_struct("Distance").field("min", min).field("max", max).finish()
            },
            Self::NamePattern(pattern) => f.debug_tuple("NamePattern").field(pattern).finish(),
            Self::All(conditions) => f.debug_tuple("All").field(conditions).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A named condition bound to a gear ID
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    condition: Condition,
    gear_id: String,
}

impl Rule {
    /// Create a rule from any condition
    pub fn new(name: impl Into<String>, condition: Condition, gear_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            condition,
            gear_id: gear_id.into(),
        }
    }

    /// Create a rule from a closure
    ///
    /// The closure is moved into the rule, so anything it captures must be
    /// owned; later changes to the caller's variables cannot reach it.
    pub fn from_fn<F>(name: impl Into<String>, predicate: F, gear_id: impl Into<String>) -> Self
    where
        F: Fn(&Activity) -> bool + Send + Sync + 'static,
    {
        Self::new(name, Condition::Custom(Arc::new(predicate)), gear_id)
    }

    /// Match activities whose type equals `activity_type` exactly
    pub fn by_activity_type(
        activity_type: impl Into<String>,
        gear_id: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        let activity_type = activity_type.into();
        let name = name.unwrap_or_else(|| format!("Type: {activity_type}"));
        Self::new(name, Condition::ActivityType(activity_type), gear_id)
    }

    /// Match activities with a known distance inside `[min, max]`
    ///
    /// Either bound may be omitted. With both omitted, any activity that has a
    /// distance at all matches, including zero.
    pub fn by_distance(
        min: Option<f64>,
        max: Option<f64>,
        gear_id: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        let name = name.unwrap_or_else(|| {
            let upper = max.map_or_else(|| "inf".to_string(), |m| m.to_string());
            format!("Distance: {}-{upper}", min.unwrap_or(0.0))
        });
        Self::new(name, Condition::Distance { min, max }, gear_id)
    }

    /// Match activities whose name contains `pattern`, ignoring case
    pub fn by_name_pattern(
        pattern: impl Into<String>,
        gear_id: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        let pattern = pattern.into();
        let name = name.unwrap_or_else(|| format!("Name contains: {pattern}"));
        Self::new(name, Condition::NamePattern(pattern), gear_id)
    }

    /// Combine rules into one that matches only when all of them do
    ///
    /// The combined rule is named after its parts, joined with " and ".
    pub fn all_of(rules: impl IntoIterator<Item = Self>, gear_id: impl Into<String>) -> Self {
        let (names, conditions): (Vec<String>, Vec<Condition>) =
            rules.into_iter().map(|r| (r.name, r.condition)).unzip();
        Self::new(names.join(" and "), Condition::All(conditions), gear_id)
    }

    /// Human-readable label
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The condition this rule tests
    #[must_use]
    pub const fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Gear to apply when the rule matches
    #[must_use]
    pub fn gear_id(&self) -> &str {
        &self.gear_id
    }

    /// Check if this rule matches the given activity
    #[must_use]
    pub fn matches(&self, activity: &Activity) -> bool {
        self.condition.evaluate(activity)
    }
}
