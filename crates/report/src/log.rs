//! Timestamped log lines.

use chrono::Utc;
use console::style;

/// Format the current UTC time for log lines.
fn format_date() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Print an informational line to stdout.
pub fn log_info(message: impl AsRef<str>) {
    println!(
        "{} {} {}",
        style(format_date()).dim(),
        style("INFO").cyan(),
        message.as_ref()
    );
}

/// Print a success line to stdout.
pub fn log_success(message: impl AsRef<str>) {
    println!(
        "{} {} {}",
        style(format_date()).dim(),
        style("SUCCESS").green(),
        message.as_ref()
    );
}

/// Print a warning line to stdout.
pub fn log_warning(message: impl AsRef<str>) {
    println!(
        "{} {} {}",
        style(format_date()).dim(),
        style("WARN").yellow(),
        message.as_ref()
    );
}

/// Print an error line to stderr.
pub fn log_error(message: impl AsRef<str>) {
    eprintln!(
        "{} {} {}",
        style(format_date()).dim(),
        style("ERROR").red(),
        message.as_ref()
    );
}
