#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_MAX_GAME_ID: u32 = 10_000;
pub const DEFAULT_PROGRESS_INTERVAL: u32 = 1_000;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Resolved settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub base_url: String,
    pub max_game_id: u32,
    pub progress_interval: u32,
    pub timeout_seconds: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_game_id: DEFAULT_MAX_GAME_ID,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ConfigProvider for ReportConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn max_game_id(&self) -> u32 {
        self.max_game_id
    }

    fn progress_interval(&self) -> u32 {
        self.progress_interval
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("progress_interval", u64::from(self.progress_interval), 1)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
        Ok(())
    }
}
