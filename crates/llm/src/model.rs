//! An invocable model handle bound to the gateway.

use crate::{
    ApiError, GenerateOptions, Generation, Gateway, Request, Response, StreamChunk, TextStream, sse,
};
use anyhow::{Context, Result};
use async_stream::try_stream;
use compact_str::CompactString;
use futures_util::StreamExt;

/// A model reference obtained from [`Gateway::model`].
#[derive(Clone)]
pub struct Model {
    /// The gateway this model is bound to.
    gateway: Gateway,

    /// The model name.
    name: CompactString,
}

impl Model {
    pub(crate) fn new(gateway: Gateway, name: &str) -> Self {
        Self {
            gateway,
            name: name.into(),
        }
    }

    /// The model name this handle is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Perform a single non-streaming generation call.
    pub async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<Generation> {
        let body = Request::new(self.name.clone(), prompt, options);
        tracing::debug!("request: {}", serde_json::to_string(&body)?);

        let response = self
            .gateway
            .client
            .post(self.gateway.endpoint())
            .headers(self.gateway.headers().clone())
            .json(&body)
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.gateway.endpoint()))?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("response: {text}");

        if !status.is_success() {
            return Err(ApiError::from_response(
                status.as_u16(),
                self.gateway.endpoint(),
                &self.name,
                &text,
            )
            .into());
        }

        let parsed: Response =
            serde_json::from_str(&text).context("invalid gateway response body")?;
        Ok(Generation {
            text: parsed.text().to_owned(),
            model: if parsed.model.is_empty() {
                self.name.clone()
            } else {
                parsed.model.clone()
            },
            finish_reason: parsed.reason().map(Into::into),
            usage: parsed.usage,
            stream: None,
        })
    }

    /// Start a streaming generation call.
    ///
    /// Returns immediately; the request is sent when the chunk stream is
    /// first polled, and transport or API errors surface through it.
    pub fn stream(&self, prompt: &str, options: &GenerateOptions) -> Generation {
        let body = Request::new(self.name.clone(), prompt, options).stream();
        tracing::debug!(
            "request: {}",
            serde_json::to_string(&body).unwrap_or_default()
        );

        let endpoint = self.gateway.endpoint().to_owned();
        let request = self
            .gateway
            .client
            .post(endpoint.as_str())
            .headers(self.gateway.headers().clone())
            .json(&body);
        let model = self.name.clone();

        let chunks: TextStream = Box::pin(try_stream! {
            let response = request.send().await?;
            let status = response.status();
            tracing::debug!("gateway responded with status {status}");

            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                Err::<(), _>(ApiError::from_response(
                    status.as_u16(),
                    &endpoint,
                    &model,
                    &text,
                ))?;
                return;
            }

            let mut buffer = String::new();
            let mut body = response.bytes_stream();
            while let Some(bytes) = body.next().await {
                let bytes = match bytes {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        tracing::error!("stream transport error: {e:?}");
                        Err(e)?
                    }
                };

                let text = String::from_utf8_lossy(&bytes);
                for data in sse::push_events(&mut buffer, &text) {
                    let chunk: StreamChunk = match serde_json::from_str(&data) {
                        Ok(chunk) => chunk,
                        Err(e) => {
                            tracing::warn!("skipping malformed chunk: {e}");
                            continue;
                        }
                    };

                    if let Some(content) = chunk.content() {
                        yield content.to_owned();
                    }
                }
            }
        });

        Generation {
            text: String::new(),
            model: self.name.clone(),
            finish_reason: None,
            usage: None,
            stream: Some(chunks),
        }
    }
}
