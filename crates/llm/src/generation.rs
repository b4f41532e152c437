//! The result object of a generation call.

use crate::Usage;
use anyhow::Result;
use compact_str::CompactString;
use futures_core::stream::BoxStream;
use std::fmt;

/// A lazy sequence of streamed text chunks.
///
/// Finite; ends when the model finishes. Not restartable.
pub type TextStream = BoxStream<'static, Result<String>>;

/// The outcome of a generation call.
///
/// Non-streaming calls fill `text`; streaming calls carry the lazy chunk
/// stream instead, and `text` stays empty.
#[derive(Default)]
pub struct Generation {
    /// The generated text (empty for streaming results).
    pub text: String,

    /// The model that produced the result.
    pub model: CompactString,

    /// The reason the model stopped generating.
    pub finish_reason: Option<CompactString>,

    /// Token usage statistics.
    pub usage: Option<Usage>,

    /// The lazy chunk stream of a streaming call.
    pub stream: Option<TextStream>,
}

impl Generation {
    /// Take the chunk stream, leaving the result without one.
    ///
    /// Streams are not restartable; a second call returns `None`.
    pub fn take_stream(&mut self) -> Option<TextStream> {
        self.stream.take()
    }

    /// Whether this result still carries an undrained chunk stream.
    pub fn is_streaming(&self) -> bool {
        self.stream.is_some()
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generation")
            .field("text", &self.text)
            .field("model", &self.model)
            .field("finish_reason", &self.finish_reason)
            .field("usage", &self.usage)
            .field("stream", &self.stream.is_some())
            .finish()
    }
}
