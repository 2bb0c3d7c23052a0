//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, AutoAssignArgs};
use strava_gears::VERSION;
use strava_gears::config::ConfigStore;
use strava_gears::output::OutputMode;

/// strava-gears - Automate gear assignment for Strava activities
#[derive(Parser, Debug)]
#[command(
    name = "strava-gears",
    version,
    about = "Automate gear assignment for Strava activities",
    long_about = "Assign bikes and shoes to Strava activities.\n\n\
                  Rules decide which gear belongs to an activity; the first\n\
                  matching rule wins and its gear is written back to Strava."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate with the Strava API
    Auth {
        /// Strava API client ID
        #[arg(long)]
        client_id: Option<String>,

        /// Strava API client secret
        #[arg(long)]
        client_secret: Option<String>,

        /// Local port for the OAuth callback
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },

    /// Check authentication status
    Status,

    /// List recent activities
    #[command(name = "list-activities")]
    ListActivities {
        /// Number of activities to list
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// List available gear
    #[command(name = "list-gear")]
    ListGear,

    /// Assign gear to a specific activity
    Assign {
        /// Activity ID
        #[arg(long)]
        activity_id: u64,

        /// Gear ID to assign
        #[arg(long)]
        gear_id: String,
    },

    /// Automatically assign gear to recent activities using rules
    #[command(name = "auto-assign")]
    AutoAssign {
        /// Gear ID to assign to matching activities
        #[arg(long, conflicts_with = "rules")]
        gear_id: Option<String>,

        /// Match activities of this type exactly (e.g. Ride, Run)
        #[arg(long, requires = "gear_id")]
        activity_type: Option<String>,

        /// Match activities whose name contains this text (case-insensitive)
        #[arg(long, requires = "gear_id")]
        name_contains: Option<String>,

        /// Match activities at least this long, in meters
        #[arg(long, requires = "gear_id")]
        min_distance: Option<f64>,

        /// Match activities at most this long, in meters
        #[arg(long, requires = "gear_id")]
        max_distance: Option<f64>,

        /// Rules file (defaults to rules.toml in the config directory)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Number of activities to process
        #[arg(long, default_value_t = 30)]
        limit: usize,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// List rules from a rules file in priority order
    Rules {
        /// Rules file (defaults to rules.toml in the config directory)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Forget stored tokens
    Logout,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": VERSION,
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("strava-gears v{VERSION}");
            println!("\nRun 'strava-gears --help' for usage");
            println!("Run 'strava-gears auth' to get started");
        }
        return Ok(());
    };

    if let Command::Version = command {
        if output_mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "version": VERSION }));
        } else {
            println!("strava-gears v{VERSION}");
        }
        return Ok(());
    }

    let mut config = ConfigStore::load_default()?;

    match command {
        Command::Auth {
            client_id,
            client_secret,
            port,
        } => commands::auth(&mut config, client_id, client_secret, port, output_mode),
        Command::Status => commands::status(&mut config, output_mode),
        Command::ListActivities { limit } => {
            commands::list_activities(&mut config, limit, output_mode)
        },
        Command::ListGear => commands::list_gear(&mut config, output_mode),
        Command::Assign {
            activity_id,
            gear_id,
        } => commands::assign(&mut config, activity_id, &gear_id, output_mode),
        Command::AutoAssign {
            gear_id,
            activity_type,
            name_contains,
            min_distance,
            max_distance,
            rules,
            limit,
            dry_run,
        } => commands::auto_assign(
            &mut config,
            AutoAssignArgs {
                gear_id,
                activity_type,
                name_contains,
                min_distance,
                max_distance,
                rules,
                limit,
                dry_run,
            },
            output_mode,
        ),
        Command::Rules { rules } => commands::rules(rules, output_mode),
        Command::Logout => commands::logout(&mut config, output_mode),
        Command::Version => Ok(()),
    }
}
