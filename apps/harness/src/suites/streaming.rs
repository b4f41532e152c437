//! Streaming generation checks.

use llm::{GenerateOptions, Generation};
use report::{log_error, log_info};
use runner::Runner;
use std::io::Write;

/// Queue a streaming generation and print chunks as they arrive.
pub fn register(r: &mut Runner<Generation>) {
    r.add_streaming_text(
        "Write a haiku about the sea.",
        None,
        GenerateOptions::default(),
    )
    .on_finish(|result, _| {
        let message = format!("Streaming from {}:", result.model);
        Box::pin(async move {
            log_info(message);
        })
    })
    .on_streaming(|chunk, _| {
        print!("{chunk}");
        std::io::stdout().flush().ok();
        Box::pin(async {})
    })
    .on_error(|error, index| {
        let message = format!("streaming_text_{index} failed: {error}");
        Box::pin(async move {
            log_error(message);
        })
    });
}
