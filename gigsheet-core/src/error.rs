//! Error types for gigsheet.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a schedule or configuration.
///
/// Filtering itself never fails; malformed labels degrade to keeping the
/// event instead.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read schedule JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown timezone '{0}'. Expected an IANA name such as Europe/London")]
    UnknownTimezone(String),

    #[error("Invalid refresh interval '{0}'. Expected a duration such as 30s or 5m")]
    InvalidRefresh(String),
}

/// Result type alias for gigsheet operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
