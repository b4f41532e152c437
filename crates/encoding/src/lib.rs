//! Base64 helpers for the nemu harness.
//!
//! Standard (padded) and URL-safe (unpadded) string round-trips, byte and
//! JSON-object variants, and a whitespace-tolerant format test. Pure
//! utilities; failures propagate directly to the caller.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde_json::Value;
use thiserror::Error;

/// Failures of the decoding helpers.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The payload does not pass the base64 format test.
    #[error("payload is not valid base64")]
    InvalidFormat,

    /// A URL-safe payload with length ≡ 1 (mod 4) cannot be valid.
    #[error("invalid URL-safe base64 length")]
    InvalidLength,

    /// The payload failed to decode.
    #[error("failed to decode base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded bytes are not valid UTF-8.
    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The decoded text is not valid JSON.
    #[error("failed to decode JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON payload is not an object.
    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Whether a payload is decodable base64, standard or URL-safe.
///
/// Whitespace is ignored. Standard input must be padded to a multiple of
/// four; URL-safe input must not have length ≡ 1 (mod 4). Empty input is
/// rejected.
pub fn is_base64(payload: &str) -> bool {
    let normalized = normalize(payload);
    if normalized.is_empty() {
        return false;
    }

    if is_standard_alphabet(&normalized) {
        normalized.len() % 4 == 0
            && STANDARD
                .decode(&normalized)
                .map(|bytes| !bytes.is_empty())
                .unwrap_or(false)
    } else if is_url_safe_alphabet(&normalized) {
        normalized.len() % 4 != 1
            && URL_SAFE_NO_PAD
                .decode(&normalized)
                .map(|bytes| !bytes.is_empty())
                .unwrap_or(false)
    } else {
        false
    }
}

/// Encode a UTF-8 string to padded standard base64.
pub fn encode(payload: &str) -> String {
    STANDARD.encode(payload)
}

/// Decode a base64 payload into a UTF-8 string.
pub fn decode(payload: &str) -> Result<String, EncodingError> {
    Ok(String::from_utf8(decode_bytes(payload)?)?)
}

/// Encode raw bytes to padded standard base64.
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a base64 payload into raw bytes.
///
/// Accepts both alphabets after the format test passes.
pub fn decode_bytes(payload: &str) -> Result<Vec<u8>, EncodingError> {
    if !is_base64(payload) {
        return Err(EncodingError::InvalidFormat);
    }

    let normalized = normalize(payload);
    if is_standard_alphabet(&normalized) {
        Ok(STANDARD.decode(normalized)?)
    } else {
        Ok(URL_SAFE_NO_PAD.decode(normalized)?)
    }
}

/// Encode a UTF-8 string to unpadded URL-safe base64.
pub fn encode_url_safe(payload: &str) -> String {
    URL_SAFE_NO_PAD.encode(payload)
}

/// Decode an URL-safe base64 payload into a UTF-8 string.
pub fn decode_url_safe(payload: &str) -> Result<String, EncodingError> {
    let trimmed = payload.trim_end_matches('=');
    if trimmed.len() % 4 == 1 {
        return Err(EncodingError::InvalidLength);
    }
    Ok(String::from_utf8(URL_SAFE_NO_PAD.decode(trimmed)?)?)
}

/// Encode a JSON object to padded standard base64.
pub fn encode_json(value: &Value) -> Result<String, EncodingError> {
    if !value.is_object() {
        return Err(EncodingError::NotAnObject);
    }
    Ok(encode(&serde_json::to_string(value)?))
}

/// Decode a base64 payload into a JSON object.
pub fn decode_json(payload: &str) -> Result<Value, EncodingError> {
    let value: Value = serde_json::from_str(&decode(payload)?)?;
    if !value.is_object() {
        return Err(EncodingError::NotAnObject);
    }
    Ok(value)
}

fn normalize(payload: &str) -> String {
    payload.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_standard_alphabet(payload: &str) -> bool {
    let trimmed = payload.trim_end_matches('=');
    payload.len() - trimmed.len() <= 2
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/')
}

fn is_url_safe_alphabet(payload: &str) -> bool {
    payload
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
