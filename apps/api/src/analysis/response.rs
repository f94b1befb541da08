//! Response Parser — pulls the JSON object out of a free-text model reply.
//!
//! The match is greedy: it spans from the first `{` to the last `}` in the
//! reply, across newlines. A reply carrying several objects is therefore read
//! as one span (and usually fails as `MalformedJson`).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON object pattern is valid"));

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("The generation service returned an empty response")]
    EmptyResponse,

    #[error("No JSON object found in the response")]
    NoJsonFound,

    #[error("Malformed JSON in the response: {0}")]
    MalformedJson(#[source] serde_json::Error),
}

/// Parses the embedded JSON object of a reply. The value is returned as-is:
/// field presence and types are the consumer's concern.
///
/// Only a reply with no text at all is `EmptyResponse`; a whitespace-only
/// reply has no object in it and is `NoJsonFound`.
pub fn parse_analysis_response(reply: &str) -> Result<Value, ResponseError> {
    if reply.is_empty() {
        return Err(ResponseError::EmptyResponse);
    }

    let span = JSON_OBJECT
        .find(reply)
        .ok_or(ResponseError::NoJsonFound)?;

    serde_json::from_str(span.as_str()).map_err(ResponseError::MalformedJson)
}
