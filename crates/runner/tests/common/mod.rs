//! Shared probe outcome for runner tests.

use anyhow::anyhow;
use futures_util::stream;
use llm::{Client, GateConfig, Gateway, TextStream};
use nemu_runner::{Runner, Streamed};

/// A minimal operation result with an optional canned chunk stream.
pub struct Probe {
    pub value: u32,
    pub chunks: Option<TextStream>,
}

impl Probe {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            chunks: None,
        }
    }

    pub fn streaming(value: u32, chunks: &[&str]) -> Self {
        let items: Vec<anyhow::Result<String>> =
            chunks.iter().map(|c| Ok((*c).to_owned())).collect();
        Self {
            value,
            chunks: Some(Box::pin(stream::iter(items))),
        }
    }

    /// A stream that yields one chunk and then fails.
    pub fn broken_stream(value: u32) -> Self {
        let items: Vec<anyhow::Result<String>> =
            vec![Ok("one".to_owned()), Err(anyhow!("stream cut"))];
        Self {
            value,
            chunks: Some(Box::pin(stream::iter(items))),
        }
    }
}

impl Streamed for Probe {
    fn take_chunks(&mut self) -> Option<TextStream> {
        self.chunks.take()
    }
}

/// A runner over a gateway that never sees traffic in these tests.
pub fn runner() -> Runner<Probe> {
    let config = GateConfig::new("http://localhost:9", "test-key");
    let gateway = Gateway::new(Client::new(), &config).expect("gateway");
    Runner::new(gateway)
}
