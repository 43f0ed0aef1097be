use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FeedConfig {
    /// Page size used when the caller does not request one.
    pub default_page_size: u32,
    /// Upper bound applied to caller-requested page sizes.
    pub max_page_size: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("feed.default_page_size", i64::from(DEFAULT_PAGE_SIZE))?
            .set_default("feed.max_page_size", i64::from(MAX_PAGE_SIZE))?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
