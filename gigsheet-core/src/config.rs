//! Global gigsheet configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REFRESH, DEFAULT_SCHEDULE_PATH, DEFAULT_TIMEZONE};
use crate::error::{ScheduleError, ScheduleResult};

fn default_schedule_path() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEDULE_PATH)
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}

fn default_refresh() -> String {
    DEFAULT_REFRESH.to_string()
}

/// Configuration at ~/.config/gigsheet/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GigsheetConfig {
    /// Schedule JSON file; `~` is expanded
    #[serde(default = "default_schedule_path")]
    pub schedule: PathBuf,

    /// IANA zone the schedule's times are written in
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// How often watch mode re-filters, e.g. "30s" or "5m"
    #[serde(default = "default_refresh")]
    pub refresh: String,

    #[serde(default)]
    pub promo: PromoConfig,
}

/// Promotional surface shown alongside the featured event.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PromoConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Identifies a campaign; changing it marks a new promotion
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

impl Default for GigsheetConfig {
    fn default() -> Self {
        GigsheetConfig {
            schedule: default_schedule_path(),
            timezone: default_timezone(),
            refresh: default_refresh(),
            promo: PromoConfig::default(),
        }
    }
}

impl GigsheetConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("gigsheet");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, falling back to defaults when there is none.
    pub fn load() -> ScheduleResult<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: GigsheetConfig =
            toml::from_str(&content).map_err(|e| ScheduleError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Schedule path with `~` expanded.
    pub fn schedule_path(&self) -> PathBuf {
        let raw = self.schedule.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&raw).into_owned())
    }

    pub fn timezone(&self) -> ScheduleResult<Tz> {
        parse_timezone(&self.timezone)
    }

    pub fn refresh_interval(&self) -> ScheduleResult<Duration> {
        let interval = humantime::parse_duration(self.refresh.trim())
            .map_err(|_| ScheduleError::InvalidRefresh(self.refresh.clone()))?;

        if interval.is_zero() {
            return Err(ScheduleError::InvalidRefresh(self.refresh.clone()));
        }

        Ok(interval)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        if path.exists() {
            return Err(ScheduleError::Config(format!(
                "Config file already exists at {}",
                path.display()
            )));
        }

        let contents = format!(
            "\
# gigsheet configuration

# Schedule JSON file:
# schedule = \"{}\"

# Timezone the schedule's dates and times are written in:
# timezone = \"{}\"

# How often `gigsheet upcoming --watch` refreshes:
# refresh = \"{}\"

# Promotional card shown with the featured event:
# [promo]
# enabled = true
# id = \"valentines-2026\"
# title = \"Valentine's Day Special\"
# subtitle = \"Romantic Dinner & Live Music\"
# cta_text = \"Book Your Table\"
# cta_link = \"https://example.com/book\"
",
            DEFAULT_SCHEDULE_PATH,
            DEFAULT_TIMEZONE.name(),
            DEFAULT_REFRESH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScheduleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Parse an IANA timezone name such as "Europe/London".
pub fn parse_timezone(name: &str) -> ScheduleResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ScheduleError::UnknownTimezone(name.to_string()))
}
