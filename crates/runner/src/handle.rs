//! Lifecycle callbacks for queued operations.

use anyhow::Error;
use futures_core::future::BoxFuture;
use parking_lot::Mutex;
use std::sync::Arc;

/// Callback invoked when an operation finishes, with the result and the
/// entry's queue index.
pub type FinishCallback<T> = Box<dyn for<'a> FnMut(&'a T, usize) -> BoxFuture<'a, ()> + Send>;

/// Callback invoked when an operation fails, with the error and the entry's
/// queue index.
pub type ErrorCallback = Box<dyn for<'a> FnMut(&'a Error, usize) -> BoxFuture<'a, ()> + Send>;

/// Callback invoked when an operation is deliberately halted.
pub type StopCallback = Box<dyn FnMut(usize) -> BoxFuture<'static, ()> + Send>;

/// Callback invoked for each streamed text chunk.
pub type StreamingCallback = Box<dyn for<'a> FnMut(&'a str, usize) -> BoxFuture<'a, ()> + Send>;

/// The four optional callback slots of a queued operation.
pub(crate) struct Callbacks<T> {
    pub finish: Option<FinishCallback<T>>,
    pub error: Option<ErrorCallback>,
    pub stop: Option<StopCallback>,
    pub streaming: Option<StreamingCallback>,
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self {
            finish: None,
            error: None,
            stop: None,
            streaming: None,
        }
    }
}

/// Fluent registry for a queued operation's lifecycle callbacks.
///
/// Returned by the `add*` methods so callbacks can be attached after
/// enqueue but before the run. Each slot holds at most one callback; a
/// later registration silently replaces the earlier one. The drain consumes
/// the callbacks, so a handle kept across a run is inert afterwards.
pub struct TestHandle<T> {
    callbacks: Arc<Mutex<Callbacks<T>>>,
}

impl<T> Clone for TestHandle<T> {
    fn clone(&self) -> Self {
        Self {
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<T> TestHandle<T> {
    pub(crate) fn new() -> Self {
        Self {
            callbacks: Arc::new(Mutex::new(Callbacks::default())),
        }
    }

    /// Register the finish callback.
    pub fn on_finish<F>(self, callback: F) -> Self
    where
        F: for<'a> FnMut(&'a T, usize) -> BoxFuture<'a, ()> + Send + 'static,
    {
        self.callbacks.lock().finish = Some(Box::new(callback));
        self
    }

    /// Register the error callback.
    pub fn on_error<F>(self, callback: F) -> Self
    where
        F: for<'a> FnMut(&'a Error, usize) -> BoxFuture<'a, ()> + Send + 'static,
    {
        self.callbacks.lock().error = Some(Box::new(callback));
        self
    }

    /// Register the stop callback.
    pub fn on_stop<F>(self, callback: F) -> Self
    where
        F: FnMut(usize) -> BoxFuture<'static, ()> + Send + 'static,
    {
        self.callbacks.lock().stop = Some(Box::new(callback));
        self
    }

    /// Register the streaming-chunk callback.
    pub fn on_streaming<F>(self, callback: F) -> Self
    where
        F: for<'a> FnMut(&'a str, usize) -> BoxFuture<'a, ()> + Send + 'static,
    {
        self.callbacks.lock().streaming = Some(Box::new(callback));
        self
    }

    /// Invoke the stop callback, if registered.
    ///
    /// The execution loop never calls this; it is a hook for action bodies
    /// that deliberately halt an operation mid-stream.
    pub async fn stop(&self, index: usize) {
        let callback = self.callbacks.lock().stop.take();
        if let Some(mut callback) = callback {
            callback(index).await;
            let mut slot = self.callbacks.lock();
            if slot.stop.is_none() {
                slot.stop = Some(callback);
            }
        }
    }

    /// Move the callbacks out, leaving every slot empty.
    pub(crate) fn take(&self) -> Callbacks<T> {
        std::mem::take(&mut *self.callbacks.lock())
    }
}
