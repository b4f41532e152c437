//! The response body for the gateway chat completions API.

use crate::Message;
use compact_str::CompactString;
use serde::Deserialize;

/// A non-streaming chat completion response.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Response {
    /// The completion id.
    #[serde(default)]
    pub id: CompactString,

    /// The model that produced the completion.
    #[serde(default)]
    pub model: CompactString,

    /// The list of completion choices.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Token usage statistics.
    pub usage: Option<Usage>,
}

impl Response {
    /// Get the content of the first choice.
    pub fn text(&self) -> &str {
        self.choices
            .first()
            .map(|c| c.message.content.as_str())
            .unwrap_or_default()
    }

    /// Get the reason the model stopped generating.
    pub fn reason(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.finish_reason.as_deref())
    }
}

/// A completion choice.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Choice {
    /// The completion message.
    #[serde(default)]
    pub message: Message,

    /// The reason the model stopped generating.
    pub finish_reason: Option<CompactString>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct Usage {
    /// Tokens consumed by the prompt.
    #[serde(default)]
    pub prompt_tokens: u32,

    /// Tokens produced by the completion.
    #[serde(default)]
    pub completion_tokens: u32,

    /// Total tokens.
    #[serde(default)]
    pub total_tokens: u32,
}
