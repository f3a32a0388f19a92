//! Validate configuration command.

use anyhow::Result;
use quotesim_config::load_config;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Fair price: {}", config.scenario.fair_price);
            println!("Take profit: {}%", config.scenario.take_profit_pct);
            println!(
                "Default ticks: {}",
                config.scenario.price_step_sequence.len()
            );
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
