//! Chat messages on the wire.

use serde::{Deserialize, Serialize};

/// A message in the chat.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Message {
    /// The role of the message.
    pub role: Role,

    /// The content of the message.
    #[serde(default)]
    pub content: String,
}

impl Message {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The role of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
pub enum Role {
    /// The user role.
    #[serde(rename = "user")]
    #[default]
    User,
    /// The assistant role.
    #[serde(rename = "assistant")]
    Assistant,
    /// The system role.
    #[serde(rename = "system")]
    System,
}
