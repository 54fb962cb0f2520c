//! Schedule model.
//!
//! A schedule is authored by hand as a JSON array of `{month, events}`
//! objects. Field names here are Rust-side names; the serde attributes keep
//! the authored JSON keys (`date`, `time`, `act`, `highlight`, ...).

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ScheduleError, ScheduleResult};

/// The full set of months and their events, in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    months: Vec<ScheduleMonth>,
}

/// One month heading and its events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMonth {
    /// Month name, used for display and for month-number resolution
    pub month: String,
    /// Events in display order (not necessarily chronological)
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A single live-music or special occurrence.
///
/// Only `day_label` and `time_label` are read when filtering; everything
/// else is display metadata carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Weekday and ordinal day, e.g. "Fri 2nd"
    #[serde(rename = "date", default, deserialize_with = "lenient_string")]
    pub day_label: String,
    /// Display time, e.g. "9:00 PM" or "8:00 PM - Late"
    #[serde(rename = "time", default, deserialize_with = "lenient_string")]
    pub time_label: String,
    #[serde(rename = "act", alias = "title", default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "highlight", default, deserialize_with = "lenient_bool", skip_serializing_if = "is_false")]
    pub is_highlighted: bool,
    #[serde(rename = "special", default, deserialize_with = "lenient_bool", skip_serializing_if = "is_false")]
    pub is_special: bool,
}

// Event fields are hand-authored; a wrong-typed value degrades to the
// field's default instead of rejecting the whole schedule.

fn lenient_opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => {
            if !other.is_null() {
                tracing::debug!(value = %other, "ignoring non-text schedule field");
            }
            None
        }
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        other => {
            if !other.is_null() {
                tracing::debug!(value = %other, "ignoring non-boolean schedule flag");
            }
            false
        }
    })
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Event {
    /// Whether the event is flagged for promotion.
    pub fn is_flagged(&self) -> bool {
        self.is_highlighted || self.is_special
    }
}

impl ScheduleMonth {
    pub fn new(month: impl Into<String>, events: Vec<Event>) -> Self {
        ScheduleMonth {
            month: month.into(),
            events,
        }
    }
}

impl Schedule {
    pub fn new(months: Vec<ScheduleMonth>) -> Self {
        Schedule { months }
    }

    /// Parse a schedule from its JSON form.
    pub fn from_json(json: &str) -> ScheduleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a schedule file.
    pub fn load(path: &Path) -> ScheduleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schedule = Self::from_json(&content)?;

        tracing::debug!(
            path = %path.display(),
            months = schedule.months.len(),
            events = schedule.event_count(),
            "loaded schedule"
        );

        Ok(schedule)
    }

    /// Serialize back to the authored JSON shape.
    pub fn to_json_pretty(&self) -> ScheduleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn months(&self) -> &[ScheduleMonth] {
        &self.months
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Total number of events across all months.
    pub fn event_count(&self) -> usize {
        self.months.iter().map(|m| m.events.len()).sum()
    }
}

impl From<Vec<ScheduleMonth>> for Schedule {
    fn from(months: Vec<ScheduleMonth>) -> Self {
        Schedule::new(months)
    }
}
