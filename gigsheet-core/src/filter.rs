//! Upcoming-event filtering.
//!
//! Schedules carry no year, so an event's year is inferred from the current
//! wall-clock month in the venue's zone: months earlier than the current one
//! belong to next year, everything else to this year. Labels that don't
//! parse never hide an event.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::constants::DEFAULT_TIMEZONE;
use crate::parse::{EventStart, parse_month};
use crate::schedule::{Event, Schedule, ScheduleMonth};

/// Wall-clock fields of an instant in a given zone.
///
/// Field order matters: the derived ordering compares year, then month,
/// day, hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClock {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl WallClock {
    /// Resolve `now` into wall-clock fields in `tz`.
    pub fn at(now: DateTime<Utc>, tz: Tz) -> Self {
        let local = now.with_timezone(&tz);
        WallClock {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
        }
    }
}

/// Year an event in `event_month` is assumed to fall in.
///
/// Only looks one year ahead: a month before the current one is next year.
pub fn infer_year(event_month: u32, clock: &WallClock) -> i32 {
    if event_month < clock.month {
        clock.year + 1
    } else {
        clock.year
    }
}

fn starts_after(start: &EventStart, clock: &WallClock) -> bool {
    let (Some(month), Some(day)) = (start.month, start.day) else {
        return true;
    };

    let event_clock = WallClock {
        year: infer_year(month, clock),
        month,
        day,
        hour: start.time.hour(),
        minute: start.time.minute(),
    };

    event_clock > *clock
}

/// Whether an event listed under `month_name` starts strictly after `now`.
pub fn is_event_in_future(month_name: &str, event: &Event, now: DateTime<Utc>, tz: Tz) -> bool {
    let clock = WallClock::at(now, tz);
    starts_after(&EventStart::parse(month_name, event), &clock)
}

/// Keep only events that start strictly after `now`, dropping months left empty.
///
/// Month order and event order within each month are preserved. The input
/// schedule is not modified.
pub fn filter_upcoming(schedule: &Schedule, now: DateTime<Utc>, tz: Tz) -> Schedule {
    let clock = WallClock::at(now, tz);

    let months = schedule
        .months()
        .iter()
        .filter_map(|month| filter_month(month, &clock))
        .collect::<Vec<_>>();

    debug!(
        kept = months.iter().map(|m| m.events.len()).sum::<usize>(),
        total = schedule.event_count(),
        tz = tz.name(),
        "filtered schedule"
    );

    Schedule::new(months)
}

/// `filter_upcoming` in the venue's default zone, Europe/London.
pub fn filter_upcoming_in_london(schedule: &Schedule, now: DateTime<Utc>) -> Schedule {
    filter_upcoming(schedule, now, DEFAULT_TIMEZONE)
}

fn filter_month(month: &ScheduleMonth, clock: &WallClock) -> Option<ScheduleMonth> {
    let month_number = parse_month(&month.month);
    if month_number.is_none() {
        debug!(month = %month.month, "unrecognised month name, keeping its events");
    }

    let events: Vec<Event> = month
        .events
        .iter()
        .filter(|event| {
            let start = EventStart::with_month(month_number, event);
            if start.day.is_none() {
                debug!(date = %event.day_label, act = %event.title, "no day in date label, keeping event");
            }
            if start.time_is_fallback {
                debug!(time = %event.time_label, act = %event.title, "no time in time label, assuming 23:59");
            }

            let keep = starts_after(&start, clock);
            if !keep {
                trace!(month = %month.month, date = %event.day_label, act = %event.title, "dropping past event");
            }
            keep
        })
        .cloned()
        .collect();

    if events.is_empty() {
        None
    } else {
        Some(ScheduleMonth::new(month.month.clone(), events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn london(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        DEFAULT_TIMEZONE
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn event(date: &str, time: &str, act: &str) -> Event {
        Event {
            day_label: date.into(),
            time_label: time.into(),
            title: act.into(),
            ..Default::default()
        }
    }

    fn single(month: &str, e: Event) -> Schedule {
        Schedule::new(vec![ScheduleMonth::new(month, vec![e])])
    }

    fn titles(schedule: &Schedule) -> Vec<String> {
        schedule
            .months()
            .iter()
            .flat_map(|m| m.events.iter().map(|e| e.title.clone()))
            .collect()
    }

    fn winter_schedule() -> Schedule {
        Schedule::new(vec![
            ScheduleMonth::new(
                "January",
                vec![
                    event("Fri 2nd", "9:00 PM", "Jack Price"),
                    event("Sat 3rd", "9:30 PM", "Inner City 3"),
                ],
            ),
            ScheduleMonth::new(
                "March",
                vec![
                    event("Sun 15th", "2:00 PM", "COLE"),
                    event("Fri 6th", "9:00 PM", "Jack Price"),
                    event("Fri 20th", "8:00 PM - Late", "DJ ROSS"),
                ],
            ),
            ScheduleMonth::new(
                "April",
                vec![
                    event("Fri 3rd", "9:00 PM", "Jack Price"),
                    event("Sat 11th", "9:30 PM", "Andy Flynn Trio"),
                ],
            ),
        ])
    }

    // --- WallClock ---

    #[test]
    fn wall_clock_uses_zone_offset() {
        // 19:30 UTC in July is 20:30 BST
        let now = Utc.with_ymd_and_hms(2026, 7, 10, 19, 30, 0).unwrap();
        let clock = WallClock::at(now, DEFAULT_TIMEZONE);
        assert_eq!(
            clock,
            WallClock { year: 2026, month: 7, day: 10, hour: 20, minute: 30 }
        );
    }

    #[test]
    fn wall_clock_orders_lexicographically() {
        let a = WallClock { year: 2026, month: 1, day: 31, hour: 23, minute: 59 };
        let b = WallClock { year: 2026, month: 2, day: 1, hour: 0, minute: 0 };
        assert!(a < b);
    }

    // --- infer_year ---

    #[test]
    fn infer_year_wraps_earlier_months() {
        let clock = WallClock { year: 2026, month: 11, day: 5, hour: 12, minute: 0 };
        assert_eq!(infer_year(1, &clock), 2027);
        assert_eq!(infer_year(10, &clock), 2027);
        assert_eq!(infer_year(11, &clock), 2026);
        assert_eq!(infer_year(12, &clock), 2026);
    }

    // --- is_event_in_future: concrete scenarios ---

    #[test]
    fn past_day_in_current_month_is_excluded() {
        let now = london(2026, 1, 15, 20, 0);
        let e = event("Fri 2nd", "9:00 PM", "Jack Price");
        assert!(!is_event_in_future("January", &e, now, DEFAULT_TIMEZONE));
    }

    #[test]
    fn later_day_in_current_month_is_included() {
        let now = london(2026, 1, 15, 20, 0);
        let e = event("Fri 16th", "9:00 PM", "Jack Price");
        assert!(is_event_in_future("January", &e, now, DEFAULT_TIMEZONE));
    }

    #[test]
    fn same_day_earlier_time_is_excluded() {
        let now = london(2026, 1, 16, 20, 0);
        let e = event("Fri 16th", "7:00 PM", "Jack Price");
        assert!(!is_event_in_future("January", &e, now, DEFAULT_TIMEZONE));
    }

    #[test]
    fn same_minute_is_excluded() {
        let now = london(2026, 1, 16, 21, 0);
        let e = event("Fri 16th", "9:00 PM", "Jack Price");
        assert!(!is_event_in_future("January", &e, now, DEFAULT_TIMEZONE));
    }

    #[test]
    fn earlier_month_rolls_into_next_year() {
        let now = london(2026, 12, 20, 12, 0);
        let e = event("Fri 2nd", "9:00 PM", "Jack Price");
        assert!(is_event_in_future("January", &e, now, DEFAULT_TIMEZONE));
    }

    #[test]
    fn comparison_happens_in_given_zone() {
        // 20:30 BST, so an 8 PM London gig has started even though it's 19:30 UTC
        let now = Utc.with_ymd_and_hms(2026, 7, 10, 19, 30, 0).unwrap();
        let e = event("Fri 10th", "8:00 PM", "DJ ROSS");
        assert!(!is_event_in_future("July", &e, now, DEFAULT_TIMEZONE));
        assert!(is_event_in_future("July", &e, now, chrono_tz::UTC));
    }

    #[test]
    fn unparseable_time_on_later_day_is_included() {
        let now = london(2026, 1, 15, 20, 0);
        let e = event("Sat 17th", "Doors 7", "Mystery Act");
        assert!(is_event_in_future("January", &e, now, DEFAULT_TIMEZONE));
    }

    #[test]
    fn unparseable_time_same_day_counts_as_end_of_day() {
        let e = event("Fri 16th", "Doors 7", "Mystery Act");
        assert!(is_event_in_future("January", &e, london(2026, 1, 16, 23, 58), DEFAULT_TIMEZONE));
        assert!(!is_event_in_future("January", &e, london(2026, 1, 16, 23, 59), DEFAULT_TIMEZONE));
    }

    #[test]
    fn unparseable_day_or_month_is_kept() {
        let now = london(2026, 6, 1, 12, 0);
        assert!(is_event_in_future("May", &event("Friday", "9:00 PM", "A"), now, DEFAULT_TIMEZONE));
        assert!(is_event_in_future("Maytember", &event("Fri 1st", "9:00 PM", "B"), now, DEFAULT_TIMEZONE));
        assert!(is_event_in_future("", &event("", "", ""), now, DEFAULT_TIMEZONE));
    }

    // --- filter_upcoming ---

    #[test]
    fn fully_past_month_is_dropped() {
        let now = london(2026, 3, 25, 12, 0);
        let filtered = filter_upcoming(&winter_schedule(), now, DEFAULT_TIMEZONE);

        let months: Vec<_> = filtered.months().iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["January", "April"]);
        assert!(filtered.months().iter().all(|m| m.month != "March"));
    }

    #[test]
    fn earlier_month_block_is_read_as_next_year() {
        // January seen from March is next January, so the whole block stays
        let now = london(2026, 3, 10, 12, 0);
        let filtered = filter_upcoming(&winter_schedule(), now, DEFAULT_TIMEZONE);

        assert_eq!(
            titles(&filtered),
            vec!["Jack Price", "Inner City 3", "COLE", "DJ ROSS", "Jack Price", "Andy Flynn Trio"]
        );
    }

    #[test]
    fn keeps_relative_order_and_metadata() {
        let mut featured = event("Sat 3rd", "9:30 PM", "Inner City 3");
        featured.genre = Some("House".into());
        featured.is_highlighted = true;
        let schedule = Schedule::new(vec![
            ScheduleMonth::new("January", vec![event("Fri 2nd", "9:00 PM", "Jack Price"), featured]),
            winter_schedule().months()[1].clone(),
        ]);
        let original = schedule.clone();
        let now = london(2026, 1, 1, 0, 0);

        let filtered = filter_upcoming(&schedule, now, DEFAULT_TIMEZONE);
        assert_eq!(filtered, original);
        assert_eq!(schedule, original);
    }

    #[test]
    fn only_past_event_leaves_empty_schedule() {
        let now = london(2026, 1, 15, 20, 0);
        let schedule = single("January", event("Fri 2nd", "9:00 PM", "Jack Price"));
        assert!(filter_upcoming(&schedule, now, DEFAULT_TIMEZONE).is_empty());
    }

    #[test]
    fn empty_schedule_and_authored_empty_months() {
        let now = london(2026, 1, 1, 0, 0);
        assert!(filter_upcoming(&Schedule::default(), now, DEFAULT_TIMEZONE).is_empty());

        let schedule = Schedule::new(vec![ScheduleMonth::new("May", vec![])]);
        assert!(filter_upcoming(&schedule, now, DEFAULT_TIMEZONE).is_empty());
    }

    #[test]
    fn malformed_events_survive_filtering() {
        let schedule = Schedule::new(vec![
            ScheduleMonth::new(
                "January",
                vec![
                    event("Fri 2nd", "9:00 PM", "Past"),
                    event("TBC", "9:00 PM", "No day"),
                ],
            ),
            ScheduleMonth::new("Smarch", vec![event("Fri 2nd", "9:00 PM", "No month")]),
        ]);
        let now = london(2026, 1, 20, 12, 0);

        let filtered = filter_upcoming(&schedule, now, DEFAULT_TIMEZONE);
        assert_eq!(titles(&filtered), vec!["No day", "No month"]);
    }

    #[test]
    fn london_default_matches_explicit_zone() {
        let now = london(2026, 3, 15, 13, 0);
        let schedule = winter_schedule();
        assert_eq!(
            filter_upcoming_in_london(&schedule, now),
            filter_upcoming(&schedule, now, DEFAULT_TIMEZONE)
        );
    }

    // --- properties ---

    #[test]
    fn filtering_is_idempotent() {
        let schedule = winter_schedule();
        for now in [
            london(2026, 1, 2, 21, 0),
            london(2026, 3, 15, 14, 0),
            london(2026, 4, 11, 22, 0),
            london(2026, 12, 31, 23, 59),
        ] {
            let once = filter_upcoming(&schedule, now, DEFAULT_TIMEZONE);
            let twice = filter_upcoming(&once, now, DEFAULT_TIMEZONE);
            assert_eq!(once, twice, "not idempotent at {now}");
            assert_eq!(once, filter_upcoming(&schedule, now, DEFAULT_TIMEZONE));
        }
    }

    #[test]
    fn future_set_only_shrinks_as_time_advances() {
        // March and April only, sampled before April: no year rollover
        let schedule = Schedule::new(winter_schedule().months()[1..].to_vec());
        let mut now = london(2026, 1, 1, 0, 0);
        let end = london(2026, 3, 31, 23, 0);
        let mut previous = filter_upcoming(&schedule, now, DEFAULT_TIMEZONE);

        while now < end {
            now += Duration::minutes(90);
            let current = filter_upcoming(&schedule, now, DEFAULT_TIMEZONE);
            for title in titles(&current) {
                assert!(titles(&previous).contains(&title), "{title} reappeared at {now}");
            }
            assert!(current.event_count() <= previous.event_count());
            previous = current;
        }
    }
}
