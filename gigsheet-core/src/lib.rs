//! Core types for gigsheet.
//!
//! This crate provides everything the CLI needs to turn an authored
//! live-music schedule into what a display surface shows:
//! - `schedule` for the month/event model and JSON ingestion
//! - `parse` for normalising free-text day and time labels
//! - `filter` for dropping events that have already started
//! - `featured` for choosing the event to headline a promo surface
//! - `diagnostics` for reporting labels that fell back to defaults

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod featured;
pub mod filter;
pub mod parse;
pub mod schedule;

pub use error::{ScheduleError, ScheduleResult};
pub use featured::{FeaturedEvent, pick_featured, pick_featured_entry};
pub use filter::{WallClock, filter_upcoming, filter_upcoming_in_london, is_event_in_future};
pub use schedule::{Event, Schedule, ScheduleMonth};
