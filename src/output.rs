//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Activity, Gear};
use crate::core::services::AutoAssignReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// An activity as shown by `list-activities`
#[derive(Debug, Serialize)]
pub struct ActivityRow {
    /// Activity ID
    pub id: u64,
    /// Activity name
    pub name: String,
    /// Activity type
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Assigned gear ID
    pub gear_id: Option<String>,
    /// Assigned gear name, falling back to its ID
    pub gear_name: Option<String>,
}

impl ActivityRow {
    /// Build a row, resolving the gear name from the athlete's gear
    #[must_use]
    pub fn new(activity: &Activity, gear: &[Gear]) -> Self {
        let gear_name = activity.gear_id.as_ref().map(|id| {
            gear.iter()
                .find(|g| &g.id == id)
                .map_or_else(|| id.clone(), |g| g.name.clone())
        });
        Self {
            id: activity.id,
            name: activity.name_or_empty().to_string(),
            activity_type: activity.activity_type.clone(),
            distance_km: activity.distance_km(),
            gear_id: activity.gear_id.clone(),
            gear_name,
        }
    }
}

/// Result of `list-activities`
#[derive(Debug, Serialize)]
pub struct ActivityListResult {
    /// Activities, newest first
    pub activities: Vec<ActivityRow>,
}

impl ActivityListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.activities.is_empty() {
            println!("No activities found.");
            return;
        }

        println!("\nFound {} activities:\n", self.activities.len());
        for a in &self.activities {
            println!("{} {}", "ID:".bold(), a.id);
            println!("  Name: {}", a.name);
            println!("  Type: {}", a.activity_type);
            println!("  Distance: {:.2} km", a.distance_km);
            println!("  Gear: {}", a.gear_name.as_deref().unwrap_or("No gear"));
            println!();
        }
    }
}

/// Result of `list-gear`
#[derive(Debug, Serialize)]
pub struct GearListResult {
    /// Bikes, then shoes
    pub gear: Vec<Gear>,
}

impl GearListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.gear.is_empty() {
            println!("No gear found.");
            return;
        }

        println!("\nAvailable gear:\n");
        for g in &self.gear {
            let primary = if g.primary { " (primary)" } else { "" };
            println!("{} {}{primary}", "ID:".bold(), g.id);
            println!("  Name: {}", g.name);
            println!("  Type: {}", g.kind);
            println!("  Distance: {:.2} km", g.distance_km());
            println!();
        }
    }
}

/// Authentication state reported by `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    /// No client credentials stored
    NotConfigured,
    /// Credentials but no access token
    NotAuthenticated,
    /// Token accepted by Strava
    Authenticated,
    /// Token present but the API call failed
    Error,
}

/// Result of `status`
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Overall state
    pub state: AuthState,
    /// Athlete display name when authenticated
    pub athlete: Option<String>,
    /// Failure message when the API call failed
    pub error: Option<String>,
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        match self.state {
            AuthState::NotConfigured => println!("Not configured. Run 'strava-gears auth' first."),
            AuthState::NotAuthenticated => {
                println!("Not authenticated. Run 'strava-gears auth' to authenticate.");
            },
            AuthState::Authenticated => println!(
                "Authenticated as: {}",
                self.athlete.as_deref().unwrap_or_default().green()
            ),
            AuthState::Error => {
                eprintln!(
                    "{} {}",
                    "Authentication error:".red(),
                    self.error.as_deref().unwrap_or_default()
                );
                println!("Please run 'strava-gears auth' to re-authenticate.");
            },
        }
    }
}

impl AutoAssignReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let verb = if self.dry_run { "Would assign" } else { "Assigned" };
        for a in &self.assignments {
            println!(
                "{verb} gear {} to activity {} ({}) [{}]",
                a.gear_id.cyan(),
                a.activity_id,
                a.activity_name,
                a.rule
            );
        }

        if self.assignments.is_empty() {
            println!(
                "No matching activities found without their gear ({} scanned, {} already assigned).",
                self.scanned, self.already_assigned
            );
        } else if self.dry_run {
            println!("\nDry run complete. Would update {} activities.", self.matched());
        } else {
            println!("\nSuccessfully updated {} activities.", self.matched());
        }
    }
}

/// A rule as shown by `rules`
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    /// 1-based priority
    pub position: usize,
    /// Rule name
    pub name: String,
    /// Gear the rule applies
    pub gear_id: String,
}

/// Result of `rules`
#[derive(Debug, Serialize)]
pub struct RuleListResult {
    /// File the rules came from
    pub source: String,
    /// Rules in priority order
    pub rules: Vec<RuleInfo>,
}

impl RuleListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.rules.is_empty() {
            println!("No rules in {}.", self.source);
            return;
        }

        println!("Rules from {} (first match wins):\n", self.source);
        for r in &self.rules {
            println!("  {}. {} -> {}", r.position, r.name, r.gear_id.cyan());
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful operation
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
