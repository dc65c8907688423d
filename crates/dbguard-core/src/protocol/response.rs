//! Outbound response envelope.
//!
//! Only denials produce a body. An allow is a bare successful exit.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{GuardError, Result};

/// Event name the host expects for pre-execution hooks.
pub const PRE_TOOL_USE: &str = "PreToolUse";

/// Denial envelope (`hookSpecificOutput`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResponse {
    #[serde(rename = "hookSpecificOutput")]
    pub output: HookSpecificOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub permission_decision: String,
    pub permission_decision_reason: String,
}

impl HookResponse {
    /// Structured refusal carrying a human-readable reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            output: HookSpecificOutput {
                hook_event_name: PRE_TOOL_USE.to_string(),
                permission_decision: "deny".to_string(),
                permission_decision_reason: reason.into(),
            },
        }
    }

    /// Encode as a single JSON line.
    pub fn encode(&self) -> Result<Bytes> {
        let mut v = serde_json::to_vec(self)
            .map_err(|e| GuardError::Internal(format!("encode hook response failed: {e}")))?;
        v.push(b'\n');
        Ok(Bytes::from(v))
    }
}
