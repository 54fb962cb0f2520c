use anyhow::Result;
use gigsheet_core::diagnostics::check_schedule;
use owo_colors::OwoColorize;

use super::Settings;
use crate::render::Render;

pub fn run(settings: &Settings) -> Result<()> {
    let schedule = settings.load_schedule()?;
    let diagnostics = check_schedule(&schedule);

    if diagnostics.is_empty() {
        println!(
            "{} {} events across {} months, all labels understood",
            "✓".green(),
            schedule.event_count(),
            schedule.months().len()
        );
        return Ok(());
    }

    for diagnostic in &diagnostics {
        println!("{}", diagnostic.render());
    }

    anyhow::bail!(
        "{} label {} could not be parsed in {}",
        diagnostics.len(),
        if diagnostics.len() == 1 { "problem" } else { "problems" },
        settings.schedule_path.display()
    );
}
