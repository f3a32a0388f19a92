//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use quotesim_core::{Scenario, SimError, SimResult};
use std::path::Path;

/// Load application configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("QUOTESIM")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

/// Load a standalone scenario from a TOML file. Missing fields fall back to
/// the documented defaults.
pub fn load_scenario(path: &Path) -> SimResult<Scenario> {
    let text = std::fs::read_to_string(path)?;
    toml::from_str(&text).map_err(|e| SimError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_scenario_from_toml() {
        let dir = std::env::temp_dir().join("quotesim-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scenario.toml");
        std::fs::write(
            &path,
            r#"
            fair_price = "40"
            take_profit_pct = "20"
            price_step_sequence = ["22", "25", "48"]
            qty = 2
            "#,
        )
        .unwrap();

        let scenario = load_scenario(&path).unwrap();
        assert_eq!(scenario.fair_price, dec!(40));
        assert_eq!(scenario.qty, 2);
        assert_eq!(
            scenario.price_step_sequence,
            vec![dec!(22), dec!(25), dec!(48)]
        );
        // Unset fields come from the defaults.
        assert_eq!(scenario.algo_ask_reset, dec!(100));
    }

    #[test]
    fn test_load_scenario_missing_file() {
        assert!(load_scenario(Path::new("/nonexistent/scenario.toml")).is_err());
    }
}
