//! The request body for the gateway chat completions API.

use crate::Message;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Sampling and prompt options for a generation call.
///
/// All fields are optional; the gateway applies its own defaults for any
/// knob left unset.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateOptions {
    /// System prompt prepended to the conversation.
    pub system: Option<String>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling probability mass.
    pub top_p: Option<f32>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<usize>,

    /// Frequency penalty.
    pub frequency_penalty: Option<f32>,

    /// Presence penalty.
    pub presence_penalty: Option<f32>,

    /// Stop sequences.
    pub stop: Vec<String>,
}

/// The request body for the chat completions API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model we are using.
    pub model: CompactString,

    /// The messages to send to the API.
    pub messages: Vec<Message>,

    /// Whether to stream the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,

    /// Stream options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_options: Option<Value>,

    /// The temperature to use for the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// The top probability to use for the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// The maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    /// The frequency penalty to use for the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,

    /// The presence penalty to use for the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,

    /// Stop sequences.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

impl Request {
    /// Build a request for a single prompt against a model.
    pub fn new(model: impl Into<CompactString>, prompt: &str, options: &GenerateOptions) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &options.system {
            messages.push(Message::system(system.clone()));
        }
        messages.push(Message::user(prompt));

        Self {
            model: model.into(),
            messages,
            stream: None,
            stream_options: None,
            temperature: options.temperature,
            top_p: options.top_p,
            max_tokens: options.max_tokens,
            frequency_penalty: options.frequency_penalty,
            presence_penalty: options.presence_penalty,
            stop: options.stop.clone(),
        }
    }

    /// Enable streaming for the request.
    ///
    /// Usage is reported in the final chunk.
    pub fn stream(mut self) -> Self {
        self.stream = Some(true);
        self.stream_options = Some(json!({ "include_usage": true }));
        self
    }
}
