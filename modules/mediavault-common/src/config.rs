use std::env;

use crate::error::{HarvestError, Result};

/// Application configuration loaded from environment variables.
///
/// Built once at process start and handed to whoever needs it; nothing else
/// in the codebase reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub apify_api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// A missing `APIFY_API_KEY` is a fatal configuration error, reported
    /// before any network call is made.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            apify_api_key: required_env("APIFY_API_KEY")?,
        })
    }

    /// Log what was loaded without exposing secret values.
    pub fn log_redacted(&self) {
        tracing::info!(apify_api_key_set = !self.apify_api_key.is_empty(), "Config loaded");
    }
}

fn required_env(key: &str) -> Result<String> {
    env::var(key)
        .map_err(|_| HarvestError::Config(format!("{key} environment variable is required")))
}
