//! Streaming response chunks.

use crate::Usage;
use compact_str::CompactString;
use serde::Deserialize;

/// A streaming chat completion chunk.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StreamChunk {
    /// The completion id.
    #[serde(default)]
    pub id: CompactString,

    /// The model that produced the chunk.
    #[serde(default)]
    pub model: CompactString,

    /// The list of completion choices (with delta content).
    #[serde(default)]
    pub choices: Vec<StreamChoice>,

    /// Token usage statistics (only in the final chunk).
    pub usage: Option<Usage>,
}

impl StreamChunk {
    /// Get the content of the first choice.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Get the reason the model stopped generating.
    pub fn reason(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.finish_reason.as_deref())
    }
}

/// A completion choice carrying incremental content.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StreamChoice {
    /// The incremental content.
    #[serde(default)]
    pub delta: Delta,

    /// The reason the model stopped generating.
    pub finish_reason: Option<CompactString>,
}

/// Incremental content within a chunk.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Delta {
    /// The content fragment.
    pub content: Option<String>,
}
