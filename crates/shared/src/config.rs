//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Demo driver configuration.
    #[serde(default)]
    pub demo: DemoConfig,
    /// Purse configuration.
    #[serde(default)]
    pub purse: PurseConfig,
}

/// Demo driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    /// Currency filtered in the first demonstration.
    #[serde(default = "default_filter_currency")]
    pub filter_currency: String,
    /// Separator placed between printed list items.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Fixed shuffle seed. The sample purse is shuffled randomly when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_filter_currency() -> String {
    "Rupee".to_string()
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            filter_currency: default_filter_currency(),
            separator: default_separator(),
            seed: None,
        }
    }
}

/// Purse configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PurseConfig {
    /// Currency given to coins and notes created without one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_currency() -> String {
    crate::types::DEFAULT_CURRENCY.to_string()
}

impl Default for PurseConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COINPURSE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
