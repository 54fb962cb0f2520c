pub mod check;
pub mod config;
pub mod featured;
pub mod upcoming;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use gigsheet_core::Schedule;
use gigsheet_core::config::{GigsheetConfig, parse_timezone};

/// Config file values with command-line overrides applied.
pub struct Settings {
    pub config: GigsheetConfig,
    pub schedule_path: PathBuf,
    pub timezone: Tz,
}

impl Settings {
    pub fn resolve(schedule: Option<PathBuf>, timezone: Option<&str>) -> Result<Self> {
        let config = GigsheetConfig::load()?;

        let schedule_path = schedule.unwrap_or_else(|| config.schedule_path());
        let timezone = match timezone {
            Some(name) => parse_timezone(name)?,
            None => config.timezone()?,
        };

        Ok(Settings {
            config,
            schedule_path,
            timezone,
        })
    }

    pub fn load_schedule(&self) -> Result<Schedule> {
        Schedule::load(&self.schedule_path).with_context(|| {
            format!(
                "Could not load schedule. Point --schedule or `schedule` in {} at your schedule JSON",
                GigsheetConfig::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the config file".into())
            )
        })
    }
}

/// Parse `--now` as RFC 3339, defaulting to the current time.
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("Invalid --now '{s}'. Expected RFC 3339, e.g. 2026-01-15T20:00:00Z")),
        None => Ok(Utc::now()),
    }
}
