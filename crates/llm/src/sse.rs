//! Server-sent event framing for streaming responses.
//!
//! The gateway emits `data: <json>` lines. A transport chunk may end
//! mid-line, so a carry buffer holds the incomplete tail until the next
//! chunk arrives.

/// Append a transport chunk to `buffer` and drain the completed events.
///
/// Returns the JSON payload of every `data:` line completed by this chunk.
/// `[DONE]` markers, keep-alive comments, and empty lines are dropped.
pub fn push_events(buffer: &mut String, chunk: &str) -> Vec<String> {
    buffer.push_str(chunk);

    let mut events = Vec::new();
    while let Some(pos) = buffer.find('\n') {
        let line: String = buffer.drain(..=pos).collect();
        let Some(data) = line.trim().strip_prefix("data:") else {
            continue;
        };

        let data = data.trim();
        if data.is_empty() || data == "[DONE]" {
            continue;
        }
        events.push(data.to_owned());
    }

    events
}
