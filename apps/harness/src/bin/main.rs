//! Harness entry point.
//!
//! Owns the process lifecycle: configuration, gateway construction, suite
//! registration, the sequential run, and the exit status. Any fault that
//! escapes the per-entry isolation of the runner terminates the process
//! with a non-zero status after rendering its diagnostic.

use anyhow::Result;
use llm::{Client, GateConfig, Gateway};
use nemu_harness::suites;
use report::{log_info, log_success, log_warning, render_error};
use runner::{Runner, Summary};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing from RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(error) = supervise().await {
        render_error(&error);
        std::process::exit(1);
    }
}

/// Register every active suite, drain the queue, and report the summary.
async fn supervise() -> Result<()> {
    let config = GateConfig::from_env()?;
    let gateway = Gateway::new(Client::new(), &config)?;
    let mut runner = Runner::new(gateway);

    for suite in suites::manifest() {
        if suite.skip {
            log_warning(format!("Skipping suite: {}", suite.name));
            continue;
        }
        log_info(format!("Loading suite: {}", suite.name));
        (suite.register)(&mut runner);
    }

    let summary = Summary::from_results(runner.run().await);

    // Terminate any streamed output before the summary line.
    println!();
    log_success(summary.to_string());
    Ok(())
}
