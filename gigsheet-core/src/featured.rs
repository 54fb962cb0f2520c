//! Featured-event selection for promotional surfaces.

use crate::schedule::{Event, Schedule};

/// The event chosen to headline a promo surface, with the month it is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedEvent<'a> {
    pub month: &'a str,
    pub event: &'a Event,
}

/// Pick the event to feature from an (already filtered) schedule.
///
/// Prefers the first highlighted or special event in month order, then event
/// order; otherwise the first event of the first non-empty month.
pub fn pick_featured_entry(schedule: &Schedule) -> Option<FeaturedEvent<'_>> {
    let mut entries = schedule.months().iter().flat_map(|month| {
        month.events.iter().map(move |event| FeaturedEvent {
            month: &month.month,
            event,
        })
    });

    let first = entries.next()?;
    if first.event.is_flagged() {
        return Some(first);
    }

    Some(entries.find(|entry| entry.event.is_flagged()).unwrap_or(first))
}

/// Like [`pick_featured_entry`], returning only the event.
pub fn pick_featured(schedule: &Schedule) -> Option<&Event> {
    pick_featured_entry(schedule).map(|entry| entry.event)
}
