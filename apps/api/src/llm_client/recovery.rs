//! Response recovery: pulls the one JSON object out of free-form model output.
//!
//! Models asked for "JSON only" still wrap it in ```json fences, lead with a
//! sentence of prose, or trail off with commentary. Recovery order:
//! 1. a fenced block whose body is an object
//! 2. otherwise a brace-depth scan from the first `{`, ignoring braces inside
//!    string literals
//!
//! Pure functions; nothing here touches the network.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("no JSON object found in model output")]
    NoJson,

    #[error("model output contains an incomplete JSON object")]
    Incomplete,

    #[error("recovered text is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

fn fenced_block() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)```(?:json)?\s*(\{.*\})\s*```").expect("fence pattern is valid")
    })
}

/// Returns the candidate JSON object text inside `raw`.
pub fn extract_json_text(raw: &str) -> Result<&str, RecoveryError> {
    let raw = raw.trim();

    if let Some(body) = fenced_block().captures(raw).and_then(|c| c.get(1)) {
        return Ok(body.as_str());
    }

    let start = raw.find('{').ok_or(RecoveryError::NoJson)?;
    let end = matching_brace(&raw[start..]).ok_or(RecoveryError::Incomplete)?;
    Ok(&raw[start..start + end + 1])
}

/// Byte offset of the `}` closing the object that opens at `text[0]`.
fn matching_brace(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

/// Recovers and parses the JSON object in `raw`.
pub fn recover_json<T: DeserializeOwned>(raw: &str) -> Result<T, RecoveryError> {
    let text = extract_json_text(raw)?;
    Ok(serde_json::from_str(text)?)
}
