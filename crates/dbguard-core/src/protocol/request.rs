//! Inbound hook payload (JSON, fail-open).
//!
//! Parsing never fails: empty, non-UTF-8, malformed, or non-object input all
//! degrade to an empty payload. A broken request is never grounds for denial.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Parsed hook payload: always a JSON object, possibly empty.
pub type Payload = Map<String, Value>;

/// Top-level payload fields copied into the audit context as-is.
const TOP_LEVEL_CONTEXT: [&str; 4] = ["tool_name", "session_id", "cwd", "hook_event_name"];

/// `tool_input` fields copied into the audit context, with their context key.
const TOOL_INPUT_CONTEXT: [(&str, &str); 2] =
    [("projectName", "project"), ("environment", "environment")];

/// Parse raw stdin bytes into a payload. Total: never returns an error.
pub fn parse_payload(raw: &[u8]) -> Payload {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Payload::new();
    }
    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        _ => Payload::new(),
    }
}

/// One command to be judged, built from a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRequest {
    /// Literal command text; empty when the payload carries none.
    pub raw: String,
    /// Caller metadata for audit enrichment only. Never used for matching.
    pub context: BTreeMap<String, String>,
}

impl CommandRequest {
    /// Extract `tool_input.command` and context with safe-default lookups.
    /// A missing key at any level, or a non-string value, yields empty.
    pub fn from_payload(payload: &Payload) -> Self {
        let tool_input = payload.get("tool_input").and_then(Value::as_object);

        let raw = tool_input
            .and_then(|ti| ti.get("command"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let mut context = BTreeMap::new();
        for key in TOP_LEVEL_CONTEXT {
            if let Some(v) = payload.get(key).and_then(Value::as_str) {
                context.insert(key.to_string(), v.to_string());
            }
        }
        if let Some(ti) = tool_input {
            for (field, key) in TOOL_INPUT_CONTEXT {
                if let Some(v) = ti.get(field).and_then(Value::as_str) {
                    context.insert(key.to_string(), v.to_string());
                }
            }
        }

        Self { raw, context }
    }

    /// True when there is nothing to evaluate.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
