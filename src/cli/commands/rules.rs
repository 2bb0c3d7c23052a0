//! List rules from a rules file

use std::path::PathBuf;

use strava_gears::adapters::rules_file;
use strava_gears::output::{OutputMode, RuleInfo, RuleListResult};
use strava_gears::paths;

/// List rules in priority order
pub fn rules(path: Option<PathBuf>, output_mode: OutputMode) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(paths::default_rules_file);
    if !path.exists() {
        anyhow::bail!("Rules file not found: {}", path.display());
    }

    let rules = rules_file::load_file(&path)?.to_rules()?;
    RuleListResult {
        source: path.display().to_string(),
        rules: rules
            .iter()
            .enumerate()
            .map(|(i, rule)| RuleInfo {
                position: i + 1,
                name: rule.name().to_string(),
                gear_id: rule.gear_id().to_string(),
            })
            .collect(),
    }
    .render(output_mode);
    Ok(())
}
