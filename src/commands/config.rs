use anyhow::Result;
use gigsheet_core::config::GigsheetConfig;
use owo_colors::OwoColorize;

pub fn run(init: bool) -> Result<()> {
    let config_path = GigsheetConfig::config_path()?;

    if init {
        GigsheetConfig::create_default_config(&config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    let config = GigsheetConfig::load()?;
    let exists = config_path.exists();

    println!("{}", "Paths".bold());
    println!(
        "  Config:    {}{}",
        config_path.display(),
        if exists { String::new() } else { " (not found, using defaults)".dimmed().to_string() }
    );
    println!("  Schedule:  {}", config.schedule_path().display());

    println!();
    println!("{}", "Settings".bold());
    println!("  Timezone:  {}", config.timezone);
    println!("  Refresh:   {}", config.refresh);
    println!(
        "  Promo:     {}",
        match (config.promo.enabled, &config.promo.id) {
            (true, Some(id)) => format!("enabled ({id})"),
            (true, None) => "enabled".to_string(),
            (false, _) => "disabled".to_string(),
        }
    );

    Ok(())
}
