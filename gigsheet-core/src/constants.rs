//! Shared defaults.

use chrono::NaiveTime;
use chrono_tz::Tz;

/// Zone the venue's schedule is authored in.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::London;

/// Schedule file used when neither the config nor the CLI names one.
pub const DEFAULT_SCHEDULE_PATH: &str = "schedule.json";

/// Refresh cadence for watch mode.
pub const DEFAULT_REFRESH: &str = "5m";

/// Start time assumed for events whose time label has no `H:MM AM/PM`.
///
/// The last minute of the day, so such events stay listed until the day ends.
pub const FALLBACK_START_TIME: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 0) {
    Some(time) => time,
    None => panic!("23:59 is a valid time of day"),
};
