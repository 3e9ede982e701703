//! Runtime Configuration
//!
//! Defaults are baked in at build time from `TODO_API_URL` and
//! `TODO_LOG_LEVEL`; a page can override any field with an embedded JSON
//! block.

use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

use crate::domain::{TodoError, TodoResult};

pub const DEFAULT_API_URL: &str = "http://localhost:4000/graphql";

/// How long an error stays on the banner
pub const DEFAULT_ERROR_TIMEOUT_MS: u64 = 6000;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// GraphQL endpoint
    pub api_url: String,
    pub error_timeout_ms: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("TODO_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            error_timeout_ms: DEFAULT_ERROR_TIMEOUT_MS,
            log_level: option_env!("TODO_LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> TodoResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TodoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TodoResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(TodoError::Config("apiUrl must not be empty".to_string()));
        }
        if self.error_timeout_ms == 0 {
            return Err(TodoError::Config(
                "errorTimeoutMs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn error_timeout(&self) -> Duration {
        Duration::from_millis(self.error_timeout_ms)
    }

    /// Unknown level names fall back to `info`
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
