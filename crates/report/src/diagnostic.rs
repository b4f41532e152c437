//! Structured error diagnostics.
//!
//! Normalizes an arbitrary `anyhow::Error` into a [`Diagnostic`] and renders
//! it as an aligned, colorized block on stderr. Gateway failures carry an
//! [`ApiError`] somewhere in their chain; its structured fields (status,
//! model, endpoint, retryable) are lifted into the block.

use console::style;
use llm::ApiError;
use url::Url;

const PAD: usize = 12;

/// A normalized error diagnostic.
#[derive(Debug, Clone, Default)]
pub struct Diagnostic {
    /// The error type.
    pub kind: String,

    /// The top-level message.
    pub message: String,

    /// Machine code reported by the gateway.
    pub code: Option<String>,

    /// OS-level errno, when an I/O error is in the chain.
    pub errno: Option<i32>,

    /// HTTP status of the failed request.
    pub status: Option<u16>,

    /// The model the request addressed.
    pub model: Option<String>,

    /// The endpoint URL.
    pub url: Option<String>,

    /// Whether the failure is safe to retry.
    pub retryable: Option<bool>,

    /// Deduplicated messages of nested causes.
    pub causes: Vec<String>,
}

impl Diagnostic {
    /// Normalize an error into a diagnostic.
    pub fn from_error(error: &anyhow::Error) -> Self {
        let mut diagnostic = Self {
            kind: "Error".to_owned(),
            message: error.to_string(),
            ..Self::default()
        };

        for cause in error.chain() {
            if let Some(api) = cause.downcast_ref::<ApiError>() {
                diagnostic.kind = api.kind.to_string();
                diagnostic.code = api.code.as_ref().map(ToString::to_string);
                diagnostic.status = api.status;
                diagnostic.model = api.model.as_ref().map(ToString::to_string);
                diagnostic.url = api.url.clone();
                diagnostic.retryable = api.retryable;
            } else if cause.downcast_ref::<llm::reqwest::Error>().is_some()
                && diagnostic.kind == "Error"
            {
                diagnostic.kind = "RequestError".to_owned();
            } else if let Some(io) = cause.downcast_ref::<std::io::Error>() {
                diagnostic.errno = diagnostic.errno.or(io.raw_os_error());
            }

            let message = cause.to_string();
            if message != diagnostic.message && !diagnostic.causes.contains(&message) {
                diagnostic.causes.push(message);
            }
        }

        diagnostic
    }

    /// Render the diagnostic block to stderr.
    pub fn render(&self) {
        eprintln!(
            "{}{} {}",
            style("×").red().bold(),
            style(" error:").red().bold(),
            style(&self.message).bold()
        );
        eprintln!("  {}{}", pad("type"), style(&self.kind).cyan());

        if self.code.is_some() || self.errno.is_some() {
            let parts: Vec<String> = self
                .code
                .iter()
                .cloned()
                .chain(self.errno.iter().map(ToString::to_string))
                .collect();
            eprintln!("  {}{}", pad("code"), parts.join(" / "));
        }

        if let Some(status) = self.status {
            eprintln!("  {}{status}", pad("http"));
        }

        if let Some(model) = &self.model {
            eprintln!("  {}{model}", pad("model"));
        }

        if let Some(url) = &self.url {
            eprintln!("  {}{}", pad("endpoint"), highlight_url(url));
        }

        if let Some(retryable) = self.retryable {
            let value = if retryable {
                style("yes").yellow().to_string()
            } else {
                "no".to_owned()
            };
            eprintln!("  {}{value}", pad("retryable"));
        }

        for cause in &self.causes {
            eprintln!("  {} {cause}", style("note:").dim());
        }
    }
}

/// Normalize and render an error in one call.
pub fn render_error(error: &anyhow::Error) {
    Diagnostic::from_error(error).render();
}

fn pad(label: &str) -> String {
    format!("{}", style(format!("{label:<width$}", width = PAD)).dim())
}

/// Split a URL into its origin (with trailing slash) and the rest.
///
/// Falls back to a plain `scheme://host/` prefix split when the input does
/// not parse; returns the input unsplit if even that fails.
pub fn split_url(input: &str) -> (String, String) {
    if let Ok(url) = Url::parse(input) {
        let origin = url.origin();
        if origin.is_tuple() {
            let origin = format!("{}/", origin.ascii_serialization());
            let mut rest = url.path().trim_start_matches('/').to_owned();
            if let Some(query) = url.query() {
                rest.push('?');
                rest.push_str(query);
            }
            if let Some(fragment) = url.fragment() {
                rest.push('#');
                rest.push_str(fragment);
            }
            return (origin, rest);
        }
    }

    match input.find("://").and_then(|scheme| {
        input[scheme + 3..]
            .find('/')
            .map(|host| scheme + 3 + host + 1)
    }) {
        Some(split) => (input[..split].to_owned(), input[split..].to_owned()),
        None => (input.to_owned(), String::new()),
    }
}

fn highlight_url(input: &str) -> String {
    let (origin, rest) = split_url(input);
    if rest.is_empty() {
        style(origin).cyan().to_string()
    } else {
        format!(
            "{}{}",
            style(origin).cyan().bold(),
            style(rest).red().bold()
        )
    }
}
