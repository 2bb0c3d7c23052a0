//! `rules.toml` loading
//!
//! A rules file lists gear rules in priority order:
//!
//! ```toml
//! [[rules]]
//! name = "Commuter"
//! match = "name_pattern"
//! pattern = "commute"
//! gear_id = "b1001"
//!
//! [[rules]]
//! match = "activity_type"
//! activity_type = "Ride"
//! gear_id = "b1002"
//!
//! [[rules]]
//! match = "distance"
//! max = 5000
//! gear_id = "g2001"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::models::Rule;
use crate::core::services::GearAssigner;

/// Errors loading a rules file
#[derive(Debug, thiserror::Error)]
pub enum RulesFileError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Rules file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys
    #[error("invalid rules file {}: {source}", path.display())]
    Parse {
        /// Rules file path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A rule is missing what its `match` kind needs
    #[error("rule #{index}: {message}")]
    Invalid {
        /// 1-based position in the file
        index: usize,
        /// What is wrong
        message: String,
    },
}

/// Which factory a rule entry uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Exact activity type
    ActivityType,
    /// Inclusive distance range
    Distance,
    /// Case-insensitive name substring
    NamePattern,
}

/// A parsed rules file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    /// Rules in priority order
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// One `[[rules]]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    /// Optional label; a default is derived from the criterion
    #[serde(default)]
    pub name: Option<String>,

    /// Gear to apply
    pub gear_id: String,

    /// Criterion kind
    #[serde(rename = "match")]
    pub kind: MatchKind,

    /// For `activity_type`
    #[serde(default)]
    pub activity_type: Option<String>,

    /// For `distance`: lower bound in meters
    #[serde(default)]
    pub min: Option<f64>,

    /// For `distance`: upper bound in meters
    #[serde(default)]
    pub max: Option<f64>,

    /// For `name_pattern`
    #[serde(default)]
    pub pattern: Option<String>,
}

impl RuleEntry {
    /// Build the rule this entry describes; `index` is used in errors
    pub fn to_rule(&self, index: usize) -> Result<Rule, RulesFileError> {
        let invalid = |message: &str| RulesFileError::Invalid {
            index,
            message: message.to_string(),
        };

        if self.gear_id.trim().is_empty() {
            return Err(invalid("gear_id must not be empty"));
        }

        let name = self.name.clone();
        match self.kind {
            MatchKind::ActivityType => {
                let activity_type = self
                    .activity_type
                    .as_deref()
                    .ok_or_else(|| invalid("match = \"activity_type\" needs an activity_type"))?;
                Ok(Rule::by_activity_type(activity_type, &self.gear_id, name))
            },
            MatchKind::Distance => {
                if self.min.is_some_and(|m| m < 0.0) || self.max.is_some_and(|m| m < 0.0) {
                    return Err(invalid("distance bounds must not be negative"));
                }
                if let (Some(min), Some(max)) = (self.min, self.max)
                    && min > max
                {
                    return Err(invalid("min must not exceed max"));
                }
                Ok(Rule::by_distance(self.min, self.max, &self.gear_id, name))
            },
            MatchKind::NamePattern => {
                let pattern = self
                    .pattern
                    .as_deref()
                    .ok_or_else(|| invalid("match = \"name_pattern\" needs a pattern"))?;
                Ok(Rule::by_name_pattern(pattern, &self.gear_id, name))
            },
        }
    }
}

impl RulesFile {
    /// Build every rule, in file order
    pub fn to_rules(&self) -> Result<Vec<Rule>, RulesFileError> {
        self.rules.iter().enumerate().map(|(i, entry)| entry.to_rule(i + 1)).collect()
    }

    /// Build an assigner holding every rule, in file order
    pub fn to_assigner(&self) -> Result<GearAssigner, RulesFileError> {
        Ok(self.to_rules()?.into_iter().collect())
    }
}

/// Parse rules from TOML text
pub fn parse_rules(content: &str) -> Result<RulesFile, toml::de::Error> {
    toml::from_str(content)
}

/// Load a rules file from disk
pub fn load_file(path: &Path) -> Result<RulesFile, RulesFileError> {
    let content = fs::read_to_string(path).map_err(|source| RulesFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rules(&content).map_err(|source| RulesFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
