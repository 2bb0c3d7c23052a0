//! Auto-assign command - apply rules to recent activities

use std::path::PathBuf;

use anyhow::Context;

use strava_gears::adapters::rules_file;
use strava_gears::config::ConfigStore;
use strava_gears::core::models::Rule;
use strava_gears::core::services::{self, AutoAssignOptions, GearAssigner};
use strava_gears::output::OutputMode;
use strava_gears::paths;

use super::session::authenticated_client;

/// Arguments of `auto-assign`
#[derive(Debug)]
pub struct AutoAssignArgs {
    /// Gear for the inline rule
    pub gear_id: Option<String>,
    /// Inline activity type criterion
    pub activity_type: Option<String>,
    /// Inline name criterion
    pub name_contains: Option<String>,
    /// Inline lower distance bound
    pub min_distance: Option<f64>,
    /// Inline upper distance bound
    pub max_distance: Option<f64>,
    /// Rules file
    pub rules: Option<PathBuf>,
    /// Activities to scan
    pub limit: usize,
    /// Report only
    pub dry_run: bool,
}

/// Automatically assign gear to activities based on rules
pub fn auto_assign(
    config: &mut ConfigStore,
    args: AutoAssignArgs,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let assigner = build_assigner(&args)?;
    let client = authenticated_client(config)?;

    let report = services::auto_assign(
        &client,
        &assigner,
        AutoAssignOptions {
            limit: args.limit,
            dry_run: args.dry_run,
        },
    )
    .context("Error auto-assigning gear")?;

    report.render(output_mode);
    Ok(())
}

fn build_assigner(args: &AutoAssignArgs) -> anyhow::Result<GearAssigner> {
    let mut assigner = GearAssigner::new();

    if let Some(gear_id) = &args.gear_id {
        assigner.add_rule(inline_rule(gear_id, args)?);
        return Ok(assigner);
    }

    let explicit = args.rules.is_some();
    let path = args.rules.clone().unwrap_or_else(paths::default_rules_file);
    if !path.exists() {
        if explicit {
            anyhow::bail!("Rules file not found: {}", path.display());
        }
        anyhow::bail!(
            "No rules given. Pass --gear-id with --activity-type, --name-contains or a \
             distance bound, or create {}",
            path.display()
        );
    }

    assigner.extend(rules_file::load_file(&path)?.to_rules()?);
    if assigner.is_empty() {
        anyhow::bail!("No rules in {}", path.display());
    }
    Ok(assigner)
}

/// One rule from the command-line criteria; several criteria must all hold
fn inline_rule(gear_id: &str, args: &AutoAssignArgs) -> anyhow::Result<Rule> {
    if let (Some(min), Some(max)) = (args.min_distance, args.max_distance)
        && min > max
    {
        anyhow::bail!("--min-distance must not exceed --max-distance");
    }

    let mut parts = Vec::new();
    if let Some(activity_type) = &args.activity_type {
        parts.push(Rule::by_activity_type(activity_type, gear_id, None));
    }
    if let Some(pattern) = &args.name_contains {
        parts.push(Rule::by_name_pattern(pattern, gear_id, None));
    }
    if args.min_distance.is_some() || args.max_distance.is_some() {
        parts.push(Rule::by_distance(args.min_distance, args.max_distance, gear_id, None));
    }

    match parts.len() {
        0 => anyhow::bail!(
            "--gear-id needs at least one of --activity-type, --name-contains, \
             --min-distance or --max-distance"
        ),
        1 => Ok(parts.remove(0)),
        _ => Ok(Rule::all_of(parts, gear_id)),
    }
}
