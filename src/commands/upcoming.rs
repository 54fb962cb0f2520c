use anyhow::Result;
use chrono::{DateTime, Utc};
use gigsheet_core::{Schedule, filter_upcoming};
use owo_colors::OwoColorize;
use tokio::time::MissedTickBehavior;

use super::{Settings, resolve_now};
use crate::render::Render;

pub fn run(settings: &Settings, now: Option<&str>, json: bool) -> Result<()> {
    let now = resolve_now(now)?;
    let upcoming = load_upcoming(settings, now)?;
    print(&upcoming, json)
}

/// Re-read and re-filter the schedule on the configured refresh interval until Ctrl-C.
pub async fn watch(settings: &Settings, json: bool) -> Result<()> {
    let period = settings.config.refresh_interval()?;
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!(every = %humantime::format_duration(period), "watching schedule");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Utc::now();
                // A schedule caught mid-edit shouldn't end the watch
                match load_upcoming(settings, now) {
                    Ok(upcoming) => {
                        if !json {
                            let local = now.with_timezone(&settings.timezone);
                            println!("{}", format!("Updated {}", local.format("%a %-d %b %H:%M")).dimmed());
                        }
                        print(&upcoming, json)?;
                        println!();
                    }
                    Err(e) => tracing::warn!("{e:#}"),
                }
            }
            _ = &mut ctrl_c => return Ok(()),
        }
    }
}

fn load_upcoming(settings: &Settings, now: DateTime<Utc>) -> Result<Schedule> {
    let schedule = settings.load_schedule()?;
    Ok(filter_upcoming(&schedule, now, settings.timezone))
}

fn print(upcoming: &Schedule, json: bool) -> Result<()> {
    if json {
        println!("{}", upcoming.to_json_pretty()?);
    } else {
        println!("{}", upcoming.render());
    }
    Ok(())
}
