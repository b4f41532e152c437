//! Structured gateway API errors.

use compact_str::CompactString;
use serde::Deserialize;
use thiserror::Error;

/// A structured error reported by the gateway.
///
/// Carries everything the diagnostic renderer needs: the error kind, the
/// HTTP status, the endpoint, the model the request addressed, and whether
/// the failure is safe to retry.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// The error type reported by the gateway.
    pub kind: CompactString,

    /// Human-readable message.
    pub message: String,

    /// Machine code (e.g. `model_not_found`).
    pub code: Option<CompactString>,

    /// HTTP status of the failed request.
    pub status: Option<u16>,

    /// The model the request addressed.
    pub model: Option<CompactString>,

    /// The endpoint URL.
    pub url: Option<String>,

    /// Whether the request is safe to retry.
    pub retryable: Option<bool>,
}

impl ApiError {
    /// Build an error from a non-success HTTP response.
    ///
    /// Parses the OpenAI-style `{"error": {...}}` envelope when the body
    /// carries one, falling back to the raw body text.
    pub fn from_response(status: u16, url: &str, model: &str, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error);

        let message = detail
            .as_ref()
            .and_then(|d| d.message.clone())
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("gateway returned status {status}")
                } else {
                    trimmed.to_owned()
                }
            });

        Self {
            kind: detail
                .as_ref()
                .and_then(|d| d.kind.clone())
                .unwrap_or_else(|| "AIError".into()),
            message,
            code: detail.and_then(|d| d.code),
            status: Some(status),
            model: Some(model.into()),
            url: Some(url.to_owned()),
            retryable: Some(retryable(status)),
        }
    }
}

/// Whether a status code indicates a retryable failure.
pub fn retryable(status: u16) -> bool {
    matches!(status, 408 | 429) || status >= 500
}

/// The OpenAI-style error envelope.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<CompactString>,
    code: Option<CompactString>,
}
