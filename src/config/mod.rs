use std::time::Duration;

use garde::Validate;
use serde::Deserialize;

/// Path of the resume filtering endpoint on the scoring service.
pub const FILTER_RESUMES_PATH: &str = "/api/filter-resumes";

/// Settings read from the process environment (and an optional `.env` file).
///
/// Only the binary loads this. Library code takes a [`ClientConfig`].
#[derive(Debug, Deserialize, Validate)]
pub struct AppConfig {
    /// Base URL of the scoring service (e.g., "http://localhost:8000")
    #[serde(default = "default_api_base_url")]
    #[garde(length(min = 1))]
    pub api_base_url: String,

    /// Request budget in milliseconds, covering send and body read
    #[serde(default = "default_request_timeout_ms")]
    #[garde(range(min = 1, max = 600_000))]
    pub request_timeout_ms: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config: Self = envy::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the environment values.
    pub fn with_overrides(
        mut self,
        api_base_url: Option<String>,
        request_timeout_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        if let Some(ms) = request_timeout_ms {
            self.request_timeout_ms = ms;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_millis(self.request_timeout_ms),
        }
    }
}

/// Explicit configuration handed to the scoring client at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        AppConfig::default().client_config()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] garde::Report),
}
