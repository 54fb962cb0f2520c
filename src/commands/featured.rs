use anyhow::Result;
use gigsheet_core::config::PromoConfig;
use gigsheet_core::{FeaturedEvent, filter_upcoming, pick_featured_entry};
use owo_colors::OwoColorize;

use super::{Settings, resolve_now};
use crate::render::{Render, render_promo};

pub fn run(settings: &Settings, now: Option<&str>, json: bool) -> Result<()> {
    let now = resolve_now(now)?;
    let schedule = settings.load_schedule()?;
    let upcoming = filter_upcoming(&schedule, now, settings.timezone);
    let featured = pick_featured_entry(&upcoming);

    println!("{}", output(featured, &settings.config.promo, json)?);
    Ok(())
}

/// What `featured` prints: JSON (`null` when nothing is upcoming), the promo
/// card when `[promo]` is enabled, or the plain featured block.
fn output(featured: Option<FeaturedEvent<'_>>, promo: &PromoConfig, json: bool) -> Result<String> {
    if json {
        let value = match featured {
            Some(entry) => serde_json::json!({ "month": entry.month, "event": entry.event }),
            None => serde_json::Value::Null,
        };
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let Some(featured) = featured else {
        return Ok("No upcoming events".dimmed().to_string());
    };

    if promo.enabled {
        Ok(render_promo(promo, &featured))
    } else {
        Ok(featured.render())
    }
}
