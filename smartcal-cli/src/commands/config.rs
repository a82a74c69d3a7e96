use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use smartcal_core::config::SmartCalConfig;

pub fn run(config: &SmartCalConfig, data_dir: &Path) -> Result<()> {
    let config_path = SmartCalConfig::config_path()?;

    println!("{} {}", "Config file:".dimmed(), config_path.display());
    println!("{} {}", "Data dir:".dimmed(), data_dir.display());
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
