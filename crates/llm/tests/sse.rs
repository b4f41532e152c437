//! Tests for SSE framing.

use nemu_llm::sse::push_events;

#[test]
fn complete_events_are_drained() {
    let mut buffer = String::new();
    let events = push_events(&mut buffer, "data: {\"a\":1}\n\ndata: {\"b\":2}\n\n");

    assert_eq!(events, vec![r#"{"a":1}"#, r#"{"b":2}"#]);
    assert!(buffer.is_empty());
}

#[test]
fn partial_event_is_carried_over() {
    let mut buffer = String::new();

    let events = push_events(&mut buffer, "data: {\"a\"");
    assert!(events.is_empty());

    let events = push_events(&mut buffer, ":1}\n");
    assert_eq!(events, vec![r#"{"a":1}"#]);
    assert!(buffer.is_empty());
}

#[test]
fn done_marker_is_dropped() {
    let mut buffer = String::new();
    let events = push_events(&mut buffer, "data: {\"a\":1}\n\ndata: [DONE]\n\n");
    assert_eq!(events, vec![r#"{"a":1}"#]);
}

#[test]
fn keep_alive_comments_are_ignored() {
    let mut buffer = String::new();
    let events = push_events(&mut buffer, ": ping\n\ndata: {\"a\":1}\n\n");
    assert_eq!(events, vec![r#"{"a":1}"#]);
}

#[test]
fn crlf_lines_are_tolerated() {
    let mut buffer = String::new();
    let events = push_events(&mut buffer, "data: {\"a\":1}\r\n\r\n");
    assert_eq!(events, vec![r#"{"a":1}"#]);
}
