//! Tests for response and stream chunk parsing.

use nemu_llm::{Response, StreamChunk};

#[test]
fn response_text_returns_first_choice() {
    let body = r#"{
        "id": "cmpl-1",
        "model": "cerebras/gpt-oss",
        "choices": [
            {"message": {"role": "assistant", "content": "hi there"}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 3, "completion_tokens": 2, "total_tokens": 5}
    }"#;
    let response: Response = serde_json::from_str(body).expect("parse response");

    assert_eq!(response.text(), "hi there");
    assert_eq!(response.reason(), Some("stop"));
    assert_eq!(response.usage.expect("usage").total_tokens, 5);
}

#[test]
fn response_without_choices_yields_empty_text() {
    let response: Response = serde_json::from_str(r#"{"choices": []}"#).expect("parse");
    assert_eq!(response.text(), "");
    assert_eq!(response.reason(), None);
}

#[test]
fn chunk_content_reads_delta() {
    let body = r#"{
        "id": "cmpl-1",
        "choices": [{"delta": {"content": "to"}, "finish_reason": null}]
    }"#;
    let chunk: StreamChunk = serde_json::from_str(body).expect("parse chunk");
    assert_eq!(chunk.content(), Some("to"));
}

#[test]
fn chunk_with_empty_delta_has_no_content() {
    let body = r#"{"choices": [{"delta": {"content": ""}, "finish_reason": "stop"}]}"#;
    let chunk: StreamChunk = serde_json::from_str(body).expect("parse chunk");

    assert_eq!(chunk.content(), None);
    assert_eq!(chunk.reason(), Some("stop"));
}

#[test]
fn usage_only_chunk_parses() {
    let body = r#"{"choices": [], "usage": {"prompt_tokens": 1, "completion_tokens": 9, "total_tokens": 10}}"#;
    let chunk: StreamChunk = serde_json::from_str(body).expect("parse chunk");

    assert_eq!(chunk.content(), None);
    assert_eq!(chunk.usage.expect("usage").completion_tokens, 9);
}
