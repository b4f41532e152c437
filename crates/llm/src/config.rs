//! Gateway connection configuration.

use anyhow::{Context, Result};

/// Environment variable holding the gateway base URL.
pub const GATE_URL: &str = "GATE_URL";

/// Environment variable holding the gateway API key.
pub const GATE_API_KEY: &str = "GATE_API_KEY";

/// Connection settings for the model gateway.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Base URL of the gateway.
    pub url: String,

    /// API key sent as a bearer token.
    pub key: String,
}

impl GateConfig {
    /// Create a configuration from explicit values.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
        }
    }

    /// Load the configuration from the environment.
    ///
    /// Missing either variable is a fatal startup error.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(GATE_URL)
            .with_context(|| format!("invalid environment: {GATE_URL} is missing"))?;
        let key = std::env::var(GATE_API_KEY)
            .with_context(|| format!("invalid environment: {GATE_API_KEY} is missing"))?;
        Ok(Self { url, key })
    }
}
