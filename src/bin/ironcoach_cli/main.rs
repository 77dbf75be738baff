// ABOUTME: IronCoach CLI - runs reports, comparisons and exports over a JSON log snapshot
// ABOUTME: Parses arguments, initializes logging and configuration, then dispatches commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Weekly insight report ending on the last logged day
//! ironcoach-cli --snapshot data/snapshot.json report --period weekly
//!
//! # Monthly report over an explicit range, pretty JSON
//! ironcoach-cli --snapshot data/snapshot.json --pretty report --period monthly \
//!     --start 2025-01-01 --end 2025-01-30
//!
//! # Compare a week against the one before it
//! ironcoach-cli --snapshot data/snapshot.json compare --start 2025-01-08 --end 2025-01-14
//!
//! # Progress export over everything in the snapshot, as text
//! ironcoach-cli --snapshot data/snapshot.json --format text export
//!
//! # Effective analytics configuration
//! ironcoach-cli config
//! ```

mod commands;
mod helpers;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use commands::CliContext;
use helpers::dates::parse_date;
use ironcoach::constants::{env_config, service_names};
use ironcoach::logging::LoggingConfig;
use ironcoach::ReportPeriod;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "ironcoach-cli",
    about = "IronCoach adaptive training analytics",
    long_about = "Builds insight reports, period comparisons, adaptive training data and progress exports from an IronCoach JSON log snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot file (defaults to $IRONCOACH_SNAPSHOT)
    #[arg(long, global = true)]
    snapshot: Option<String>,

    /// JSON analytics configuration (defaults to $IRONCOACH_CONFIG)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Serialized result
    Json,
    /// Human-readable summary
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PeriodArg {
    Weekly,
    Monthly,
}

impl From<PeriodArg> for ReportPeriod {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Weekly => Self::Weekly,
            PeriodArg::Monthly => Self::Monthly,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Weekly or monthly insight report
    Report {
        /// Report cadence
        #[arg(long, value_enum, default_value_t = PeriodArg::Weekly)]
        period: PeriodArg,

        /// First day of the report (defaults to a full period ending on --end)
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,

        /// Last day of the report (defaults to the last logged day)
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },

    /// Compare a period against the one directly before it
    Compare {
        /// First day of the current period
        #[arg(long, value_parser = parse_date)]
        start: NaiveDate,

        /// Last day of the current period
        #[arg(long, value_parser = parse_date)]
        end: NaiveDate,

        /// First day of the previous period (defaults to the adjacent period)
        #[arg(long, value_parser = parse_date, requires = "previous_end")]
        previous_start: Option<NaiveDate>,

        /// Last day of the previous period
        #[arg(long, value_parser = parse_date, requires = "previous_start")]
        previous_end: Option<NaiveDate>,
    },

    /// Long-horizon progress export
    Export {
        /// First day of the export (defaults to the first logged day)
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,

        /// Last day of the export (defaults to the last logged day)
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },

    /// Adaptive training state and recommended adjustments
    Adaptive {
        /// User identifier echoed in the output
        #[arg(long, default_value = "local")]
        user_id: String,

        /// Days covered, ending on --end
        #[arg(long, default_value = "7")]
        days: i64,

        /// Last day (defaults to the last logged day)
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },

    /// Print the effective analytics configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env()
        .with_level(log_level)
        .with_service_name(service_names::IRONCOACH_CLI)
        .init()?;

    let config = commands::config::load(cli.config.or_else(env_config::config_path)).await?;

    if matches!(cli.command, Command::Config) {
        return commands::config::show(&config, cli.pretty);
    }

    let snapshot = cli
        .snapshot
        .or_else(env_config::snapshot_path)
        .ok_or_else(|| anyhow!("No snapshot given: pass --snapshot or set IRONCOACH_SNAPSHOT"))?;
    info!(snapshot = %snapshot, "IronCoach CLI");

    let ctx = CliContext::open(&snapshot, config, cli.format, cli.pretty).await?;

    match cli.command {
        Command::Report { period, start, end } => {
            commands::analytics::report(&ctx, period.into(), start, end).await?;
        }
        Command::Compare {
            start,
            end,
            previous_start,
            previous_end,
        } => {
            let previous = previous_start.zip(previous_end);
            commands::analytics::compare(&ctx, start, end, previous).await?;
        }
        Command::Export { start, end } => {
            commands::analytics::export(&ctx, start, end).await?;
        }
        Command::Adaptive { user_id, days, end } => {
            commands::analytics::adaptive(&ctx, &user_id, days, end).await?;
        }
        Command::Config => {}
    }

    Ok(())
}
