//! OpenAI-compatible gateway client for the nemu harness.
//!
//! This crate provides the gateway construction path (`GateConfig` →
//! `Gateway` → `Model`), the chat-completions wire types (`Request`,
//! `Response`, `StreamChunk`), and the `Generation` result object with its
//! lazy `TextStream` for streaming calls.

pub use config::{GATE_API_KEY, GATE_URL, GateConfig};
pub use error::{ApiError, retryable};
pub use gateway::{DEFAULT_MODEL, Gateway};
pub use generation::{Generation, TextStream};
pub use message::{Message, Role};
pub use model::Model;
pub use request::{GenerateOptions, Request};
pub use reqwest::{self, Client};
pub use response::{Choice, Response, Usage};
pub use stream::{Delta, StreamChoice, StreamChunk};

mod config;
mod error;
mod gateway;
mod generation;
mod message;
mod model;
mod request;
mod response;
pub mod sse;
mod stream;
