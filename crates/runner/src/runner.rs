//! The sequential execution queue.

use crate::{
    Streamed, Summary, TestHandle,
    handle::Callbacks,
};
use anyhow::Result;
use futures_core::future::BoxFuture;
use futures_util::StreamExt;
use llm::{DEFAULT_MODEL, GenerateOptions, Gateway, Generation};
use std::future::Future;

/// A deferred zero-argument asynchronous operation.
type Action<T> = Box<dyn FnOnce() -> BoxFuture<'static, Result<T>> + Send>;

/// One scheduled operation plus its name and callback registry.
struct QueueEntry<T> {
    action: Action<T>,
    handle: TestHandle<T>,
    name: String,
}

/// A sequential queue of deferred model invocations.
///
/// Operations run strictly in enqueue order; one entry's failure never
/// aborts the drain. The queue resets to empty after every run and the
/// results of the previous run are overwritten. Callers must not enqueue
/// while [`run`](Runner::run) is in flight.
pub struct Runner<T = Generation> {
    /// The model gateway backing the convenience constructors.
    gateway: Gateway,

    /// The live queue, in enqueue order.
    queue: Vec<QueueEntry<T>>,

    /// Results of the most recent run.
    results: Vec<Option<T>>,
}

impl<T: Streamed> Runner<T> {
    /// Create a runner over a gateway.
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            queue: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Number of operations waiting in the queue.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Results of the most recent run, one slot per drained entry.
    pub fn results(&self) -> &[Option<T>] {
        &self.results
    }

    /// Pass/fail counts for the most recent run.
    pub fn summary(&self) -> Summary {
        Summary::from_results(&self.results)
    }

    /// Enqueue an arbitrary deferred operation.
    ///
    /// Returns the handle for attaching lifecycle callbacks.
    pub fn add<F, Fut>(&mut self, action: F, name: impl Into<String>) -> TestHandle<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let handle = TestHandle::new();
        self.queue.push(QueueEntry {
            action: Box::new(move || Box::pin(action())),
            handle: handle.clone(),
            name: name.into(),
        });
        handle
    }

    /// Drain the queue in enqueue order and record one slot per entry.
    ///
    /// Per entry: on success the result lands in its slot, the finish
    /// callback fires, and a chunk stream (when present and a streaming
    /// callback is registered) is drained with the callback awaited before
    /// the next chunk is pulled. On failure the slot holds the sentinel,
    /// the error callback fires, and the diagnostic block is rendered
    /// unconditionally. The next entry starts only after the current one
    /// fully completes.
    pub async fn run(&mut self) -> &[Option<T>] {
        let queue = std::mem::take(&mut self.queue);
        let mut results = Vec::with_capacity(queue.len());

        for (index, entry) in queue.into_iter().enumerate() {
            let mut callbacks = entry.handle.take();
            let slot = match (entry.action)().await {
                Ok(mut value) => {
                    tracing::debug!("{} finished", entry.name);
                    if let Some(on_finish) = callbacks.finish.as_mut() {
                        on_finish(&value, index).await;
                    }

                    match drain_chunks(&mut value, &mut callbacks, index).await {
                        Ok(()) => Some(value),
                        Err(error) => {
                            tracing::debug!("{} failed mid-stream: {error}", entry.name);
                            fail(&error, &mut callbacks, index).await;
                            None
                        }
                    }
                }
                Err(error) => {
                    tracing::debug!("{} failed: {error}", entry.name);
                    fail(&error, &mut callbacks, index).await;
                    None
                }
            };
            results.push(slot);
        }

        self.results = results;
        &self.results
    }
}

impl Runner<Generation> {
    /// Enqueue a non-streaming text generation against the gateway.
    ///
    /// `model` defaults to [`DEFAULT_MODEL`]; the entry is auto-named
    /// `generate_text_<index>` with its queue position at insertion time.
    pub fn add_generate_text(
        &mut self,
        prompt: impl Into<String>,
        model: Option<&str>,
        options: GenerateOptions,
    ) -> TestHandle<Generation> {
        let name = format!("generate_text_{}", self.queue.len());
        let model = self.gateway.model(model.unwrap_or(DEFAULT_MODEL));
        let prompt = prompt.into();
        self.add(
            move || async move { model.generate(&prompt, &options).await },
            name,
        )
    }

    /// Enqueue a streaming text generation against the gateway.
    ///
    /// The action resolves to a result carrying a lazy chunk stream; the
    /// entry is auto-named `streaming_text_<index>`.
    pub fn add_streaming_text(
        &mut self,
        prompt: impl Into<String>,
        model: Option<&str>,
        options: GenerateOptions,
    ) -> TestHandle<Generation> {
        let name = format!("streaming_text_{}", self.queue.len());
        let model = self.gateway.model(model.unwrap_or(DEFAULT_MODEL));
        let prompt = prompt.into();
        self.add(move || async move { Ok(model.stream(&prompt, &options)) }, name)
    }
}

/// Drain a result's chunk stream, pacing it with the streaming callback.
///
/// A no-op when no streaming callback is registered or the result carries
/// no stream.
async fn drain_chunks<T: Streamed>(
    value: &mut T,
    callbacks: &mut Callbacks<T>,
    index: usize,
) -> Result<()> {
    let Some(on_streaming) = callbacks.streaming.as_mut() else {
        return Ok(());
    };
    let Some(mut chunks) = value.take_chunks() else {
        return Ok(());
    };

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        on_streaming(&chunk, index).await;
    }
    Ok(())
}

/// Route a failure to the error callback and the diagnostic renderer.
///
/// The renderer runs regardless of whether a callback is registered.
async fn fail<T>(error: &anyhow::Error, callbacks: &mut Callbacks<T>, index: usize) {
    if let Some(on_error) = callbacks.error.as_mut() {
        on_error(error, index).await;
    }
    report::render_error(error);
}
