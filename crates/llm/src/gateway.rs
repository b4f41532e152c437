//! The model gateway.

use crate::{GateConfig, Model};
use anyhow::Result;
use reqwest::{
    Client,
    header::{self, HeaderMap},
};

/// Model used when a queued operation does not name one.
pub const DEFAULT_MODEL: &str = "cerebras/gpt-oss";

/// A handle to an OpenAI-compatible model gateway.
#[derive(Clone)]
pub struct Gateway {
    /// The HTTP client.
    pub client: Client,

    /// Request headers (authorization, content-type).
    headers: HeaderMap,

    /// Chat completions endpoint URL.
    endpoint: String,
}

impl Gateway {
    /// Create a gateway from connection settings.
    pub fn new(client: Client, config: &GateConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(header::ACCEPT, "application/json".parse()?);
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", config.key).parse()?,
        );
        Ok(Self {
            client,
            headers,
            endpoint: endpoint(&config.url),
        })
    }

    /// Bind a model name to an invocable handle.
    pub fn model(&self, name: &str) -> Model {
        Model::new(self.clone(), name)
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The chat completions endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Derive the chat completions endpoint from a base URL.
fn endpoint(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/chat/completions")
    }
}
