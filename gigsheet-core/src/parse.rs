//! Normalisation of free-text schedule labels.
//!
//! Month names, day labels ("Fri 2nd") and time labels ("8:00 PM - Late")
//! are turned into numbers here, once, so filtering only ever compares
//! structured values.

use std::fmt;

use chrono::NaiveTime;

use crate::constants::FALLBACK_START_TIME;
use crate::schedule::Event;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolve a month name to its calendar position (January = 1).
pub fn parse_month(name: &str) -> Option<u32> {
    let name = name.trim();
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
}

/// Extract the day of month from a label like "Fri 2nd".
///
/// The first run of digits is the day; any ordinal suffix is ignored.
pub fn parse_day(label: &str) -> Option<u32> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let digits = &label[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let day: u32 = digits[..end].parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

/// Extract the first `H:MM AM|PM` from a time label as a 24-hour time.
///
/// Text around the match is ignored, so "8:00 PM - Late" gives 20:00.
pub fn parse_time(label: &str) -> Option<NaiveTime> {
    let bytes = label.as_bytes();
    (0..bytes.len())
        .filter(|&i| bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit()))
        .find_map(|i| match_clock_time(&bytes[i..]))
}

/// Match `H:MM<space*>AM|PM` at the start of `s`.
fn match_clock_time(s: &[u8]) -> Option<NaiveTime> {
    let hour_len = s.iter().take_while(|b| b.is_ascii_digit()).count();
    if hour_len > 2 {
        return None;
    }

    let (colon, rest) = s[hour_len..].split_first()?;
    if *colon != b':' {
        return None;
    }

    let minute_digits = rest.get(..2)?;
    if !minute_digits.iter().all(u8::is_ascii_digit) || rest.get(2).is_some_and(u8::is_ascii_digit) {
        return None;
    }

    let rest = &rest[2..];
    let gap = rest.iter().take_while(|b| b.is_ascii_whitespace()).count();
    let meridiem = rest.get(gap..gap + 2)?;
    let is_pm = if meridiem.eq_ignore_ascii_case(b"pm") {
        true
    } else if meridiem.eq_ignore_ascii_case(b"am") {
        false
    } else {
        return None;
    };

    let hour = digits_value(&s[..hour_len]);
    let minute = digits_value(minute_digits);
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn digits_value(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0, |acc, d| acc * 10 + u32::from(d - b'0'))
}

/// An event's start, normalised from its labels.
///
/// `month` and `day` stay `None` when their labels don't parse; callers
/// treat such events as upcoming. An unparseable time falls back to 23:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStart {
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub time: NaiveTime,
    pub time_is_fallback: bool,
}

impl EventStart {
    pub fn parse(month_name: &str, event: &Event) -> Self {
        Self::with_month(parse_month(month_name), event)
    }

    /// Parse an event's labels given an already-resolved month.
    pub fn with_month(month: Option<u32>, event: &Event) -> Self {
        let parsed_time = parse_time(&event.time_label);

        EventStart {
            month,
            day: parse_day(&event.day_label),
            time: parsed_time.unwrap_or(FALLBACK_START_TIME),
            time_is_fallback: parsed_time.is_none(),
        }
    }

    /// Labels that failed to parse, in month/day/time order.
    pub fn issues(&self) -> Vec<ParseIssue> {
        let mut issues = Vec::new();
        if self.month.is_none() {
            issues.push(ParseIssue::UnknownMonth);
        }
        if self.day.is_none() {
            issues.push(ParseIssue::MissingDay);
        }
        if self.time_is_fallback {
            issues.push(ParseIssue::MissingTime);
        }
        issues
    }
}

/// A label that could not be normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIssue {
    UnknownMonth,
    MissingDay,
    MissingTime,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIssue::UnknownMonth => write!(f, "month name not recognised, event always shown"),
            ParseIssue::MissingDay => write!(f, "no day of month in date label, event always shown"),
            ParseIssue::MissingTime => write!(f, "no H:MM AM/PM in time label, assuming 23:59"),
        }
    }
}
