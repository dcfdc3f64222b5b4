//! Payperiod CLI - Command Line Pay Period Calculation
//!
//! This is the operational entry point for the payperiod libraries.
//!
//! # Commands
//!
//! - `payperiod current` - Period containing today (or `--date`)
//! - `payperiod previous` - Period before the current one
//! - `payperiod next` - Period after the current one
//! - `payperiod schedule --from <date> (--until <date> | --count <n>)` - Consecutive periods
//! - `payperiod check` - Validate and print the effective configuration
//!
//! # Configuration
//!
//! Defaults, then the TOML file given with `--config`, then command-line
//! flags. Every setting flag also reads its `PAYPERIOD_*` environment
//! variable, and an explicit flag beats the variable.
//!
//! Logs go to stderr so stdout stays machine-readable.

use clap::{Args, Parser, Subcommand};
use payperiod_models::periods::PeriodType;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// Payperiod pay period calculator
#[derive(Parser)]
#[command(name = "payperiod")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging unless a log level is given
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    settings: SettingsArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Payment settings overrides
#[derive(Args)]
struct SettingsArgs {
    /// Payment frequency (weekly, biweekly, monthly)
    #[arg(long, global = true, env = "PAYPERIOD_FREQUENCY")]
    frequency: Option<String>,

    /// First day of a weekly period, 1 (Monday) to 7 (Sunday)
    #[arg(long, global = true, env = "PAYPERIOD_CYCLE_START_DAY")]
    cycle_start_day: Option<u8>,

    /// Frequency used when the stored one is not recognised
    #[arg(long, global = true, env = "PAYPERIOD_DEFAULT_FREQUENCY")]
    default_frequency: Option<String>,

    /// IANA timezone used to resolve today (e.g., Europe/Berlin)
    #[arg(long, global = true, env = "PAYPERIOD_TIMEZONE")]
    timezone: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "PAYPERIOD_LOG_LEVEL")]
    log_level: Option<String>,
}

/// Reference date and output options for a single period
#[derive(Args)]
struct PeriodArgs {
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,

    /// Output format (json, table)
    #[arg(short, long, default_value = "table")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the period containing the reference date
    Current(PeriodArgs),

    /// Show the period before the current one
    Previous(PeriodArgs),

    /// Show the period after the current one
    Next(PeriodArgs),

    /// List consecutive periods
    Schedule {
        /// Date whose period opens the schedule (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Date whose period closes the schedule (YYYY-MM-DD)
        #[arg(long, conflicts_with = "count", required_unless_present = "count")]
        until: Option<String>,

        /// Number of periods to list
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check configuration and print the effective settings
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            frequency: cli.settings.frequency.clone(),
            cycle_start_day: cli.settings.cycle_start_day,
            default_frequency: cli.settings.default_frequency.clone(),
            timezone: cli.settings.timezone.clone(),
            log_level: cli.settings.log_level.clone().or_else(|| {
                cli.verbose.then(|| "debug".to_string())
            }),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());

    debug!(
        frequency = %config.frequency,
        cycle_start_day = config.cycle_start_day,
        default_frequency = %config.default_frequency,
        timezone = config.timezone.as_deref().unwrap_or("local"),
        log_level = %config.log_level,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Current(args) => commands::period::run(
            &config,
            PeriodType::Current,
            args.date.as_deref(),
            &args.format,
        ),
        Commands::Previous(args) => commands::period::run(
            &config,
            PeriodType::Previous,
            args.date.as_deref(),
            &args.format,
        ),
        Commands::Next(args) => commands::period::run(
            &config,
            PeriodType::Next,
            args.date.as_deref(),
            &args.format,
        ),
        Commands::Schedule {
            from,
            until,
            count,
            format,
        } => commands::schedule::run(&config, &from, until.as_deref(), count, &format),
        Commands::Check => commands::check::run(&config),
    }
}
