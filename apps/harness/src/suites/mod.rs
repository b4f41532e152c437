//! The suite manifest.
//!
//! Suites are registered explicitly here rather than discovered from the
//! filesystem. A suite opts out of execution with `skip`.

use llm::Generation;
use runner::Runner;

mod generate;
mod streaming;

/// A named group of queued operations.
pub struct Suite {
    /// Display name used in load/skip log lines.
    pub name: &'static str,

    /// Whether the suite is excluded from the run.
    pub skip: bool,

    /// Enqueue the suite's operations on the runner.
    pub register: fn(&mut Runner<Generation>),
}

/// Every suite the harness knows about, in execution order.
pub fn manifest() -> Vec<Suite> {
    vec![
        Suite {
            name: "generate",
            skip: false,
            register: generate::register,
        },
        Suite {
            name: "streaming",
            skip: false,
            register: streaming::register,
        },
    ]
}
