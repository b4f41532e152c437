//! Plain text generation checks.

use llm::{GenerateOptions, Generation};
use report::{log_error, log_success};
use runner::Runner;

/// Queue a single generation against the default model.
pub fn register(r: &mut Runner<Generation>) {
    r.add_generate_text(
        "What can you tell me about love?",
        None,
        GenerateOptions::default(),
    )
    .on_finish(|result, _| {
        let text = result.text.clone();
        Box::pin(async move {
            log_success(format!("Response: {text}"));
        })
    })
    .on_error(|error, index| {
        let message = format!("generate_text_{index} failed: {error}");
        Box::pin(async move {
            log_error(message);
        })
    });
}
