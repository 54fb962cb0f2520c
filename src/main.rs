mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::Settings;

#[derive(Parser)]
#[command(name = "gigsheet")]
#[command(about = "Show what's on next from your venue's live-music schedule")]
struct Cli {
    /// Schedule JSON file (overrides the config file)
    #[arg(long, global = true)]
    schedule: Option<PathBuf>,

    /// Timezone the schedule is written in, e.g. Europe/London (overrides the config file)
    #[arg(long, global = true)]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events that haven't started yet, grouped by month
    Upcoming {
        /// Evaluate as of this instant (RFC 3339, e.g. "2026-01-15T20:00:00Z") instead of now
        #[arg(long)]
        now: Option<String>,

        /// Print the filtered schedule as JSON
        #[arg(long)]
        json: bool,

        /// Keep running and refresh on the configured interval
        #[arg(short, long, conflicts_with = "now")]
        watch: bool,
    },
    /// Show the event to headline on promotional surfaces
    Featured {
        /// Evaluate as of this instant (RFC 3339) instead of now
        #[arg(long)]
        now: Option<String>,

        /// Print the featured event as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report events whose date or time labels can't be understood
    Check,
    /// Show config file location and effective settings
    Config {
        /// Write a commented default config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Upcoming { now, json, watch } => {
            let settings = Settings::resolve(cli.schedule, cli.timezone.as_deref())?;
            if watch {
                commands::upcoming::watch(&settings, json).await
            } else {
                commands::upcoming::run(&settings, now.as_deref(), json)
            }
        }
        Commands::Featured { now, json } => {
            let settings = Settings::resolve(cli.schedule, cli.timezone.as_deref())?;
            commands::featured::run(&settings, now.as_deref(), json)
        }
        Commands::Check => {
            let settings = Settings::resolve(cli.schedule, cli.timezone.as_deref())?;
            commands::check::run(&settings)
        }
        Commands::Config { init } => commands::config::run(init),
    }
}

/// Logs go to stderr so `--json` output stays clean. Defaults to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
