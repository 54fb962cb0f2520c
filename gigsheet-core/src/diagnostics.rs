//! Reports on labels that fell back to defaults.
//!
//! Filtering keeps any event it can't place in time, so a typo in a date
//! label shows the event forever. These diagnostics let authors find them.

use std::fmt;

use crate::parse::{EventStart, ParseIssue, parse_month};
use crate::schedule::Schedule;

/// One parse problem for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub month: String,
    /// Position of the event within its month
    pub index: usize,
    pub title: String,
    pub issue: ParseIssue,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.is_empty() {
            "(untitled)"
        } else {
            &self.title
        };
        write!(f, "{} #{} {}: {}", self.month, self.index + 1, title, self.issue)
    }
}

/// List every event whose month, day or time label did not parse.
pub fn check_schedule(schedule: &Schedule) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for month in schedule.months() {
        let month_number = parse_month(&month.month);

        for (index, event) in month.events.iter().enumerate() {
            let start = EventStart::with_month(month_number, event);
            diagnostics.extend(start.issues().into_iter().map(|issue| Diagnostic {
                month: month.month.clone(),
                index,
                title: event.title.clone(),
                issue,
            }));
        }
    }

    diagnostics
}
