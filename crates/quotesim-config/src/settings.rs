//! Configuration structures.

use quotesim_core::Scenario;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default scenario used when no scenario file or flags are given.
    #[serde(default)]
    pub scenario: Scenario,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "quotesim".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "quotesim");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.scenario.fair_price, dec!(40));
    }

    #[test]
    fn test_partial_toml_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [app]
            name = "quotesim"
            environment = "production"

            [scenario]
            fair_price = "50"
            take_profit_pct = "10"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.environment, "production");
        assert_eq!(config.scenario.fair_price, dec!(50));
        assert_eq!(config.scenario.take_profit_pct, dec!(10));
        // Unspecified scenario fields fall back to the documented defaults.
        assert_eq!(config.scenario.human_limit_price, dec!(21));
    }
}
