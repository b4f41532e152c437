//! Sequential test-runner core for the nemu harness.
//!
//! A [`Runner`] owns a FIFO queue of deferred asynchronous operations, each
//! paired with a [`TestHandle`] for attaching lifecycle callbacks (finish,
//! error, stop, streaming-chunk). [`Runner::run`] drains the queue in
//! enqueue order with per-entry failure isolation and records one result
//! slot per entry: the operation's value, or `None` on failure.

pub use handle::{
    ErrorCallback, FinishCallback, StopCallback, StreamingCallback, TestHandle,
};
pub use runner::Runner;
pub use streamed::Streamed;
pub use summary::Summary;

mod handle;
mod runner;
mod streamed;
mod summary;
