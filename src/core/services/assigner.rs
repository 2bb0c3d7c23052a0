//! Gear assigner - resolves one gear ID per activity
//!
//! Rules are kept in registration order, which is also their priority. The
//! first rule whose condition holds decides the gear; later rules are not
//! consulted.

use crate::core::models::{Activity, Rule};

/// Ordered set of gear rules
#[derive(Debug, Clone, Default)]
pub struct GearAssigner {
    rules: Vec<Rule>,
}

impl GearAssigner {
    /// Create an assigner with no rules
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule with lower priority than every rule already present
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Remove every rule
    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    /// Rules in priority order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of registered rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule matching the activity, if any
    #[must_use]
    pub fn find_matching_rule(&self, activity: &Activity) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(activity))
    }

    /// Gear ID of the first rule matching the activity, if any
    #[must_use]
    pub fn find_matching_gear(&self, activity: &Activity) -> Option<&str> {
        self.find_matching_rule(activity).map(Rule::gear_id)
    }
}

impl FromIterator<Rule> for GearAssigner {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for GearAssigner {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
