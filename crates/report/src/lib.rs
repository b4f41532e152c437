//! Colorized console output for the nemu harness.
//!
//! Two surfaces: timestamped log lines (`log_info`, `log_success`,
//! `log_warning`, `log_error`) and the structured error block rendered by
//! [`render_error`] after a queued operation fails.

pub use diagnostic::{Diagnostic, render_error, split_url};
pub use log::{log_error, log_info, log_success, log_warning};

mod diagnostic;
mod log;
