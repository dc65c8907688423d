//! Audit trail: one NDJSON record per verdict.
//!
//! Best-effort only. A failed write is dropped (never retried, never surfaced),
//! so the decision path is identical whether or not storage is available.

pub mod sink;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use dbguard_core::protocol::CommandRequest;

use crate::policy::Decision;

pub use sink::{AuditSink, FileSink, MemorySink};

/// One log line. Never read back by the gate.
#[derive(Debug, Serialize)]
pub struct AuditRecord<'a> {
    pub timestamp: String,
    pub action: &'static str,
    pub reason: Option<&'a str>,
    pub command: String,
    #[serde(skip_serializing_if = "no_context")]
    pub context: &'a BTreeMap<String, String>,
}

impl<'a> AuditRecord<'a> {
    pub fn new(decision: &'a Decision, request: &'a CommandRequest, command_max_chars: usize) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            action: decision.verdict.as_action(),
            reason: decision.reason.as_deref(),
            command: truncate_chars(&request.raw, command_max_chars),
            context: &request.context,
        }
    }
}

fn no_context(c: &&BTreeMap<String, String>) -> bool {
    c.is_empty()
}

#[derive(Clone)]
pub struct AuditLogger {
    sink: Arc<dyn AuditSink>,
    command_max_chars: usize,
}

impl AuditLogger {
    pub fn new(sink: Arc<dyn AuditSink>, command_max_chars: usize) -> Self {
        Self {
            sink,
            command_max_chars,
        }
    }

    /// Append one record. Never fails from the caller's point of view.
    pub fn record(&self, decision: &Decision, request: &CommandRequest) {
        let rec = AuditRecord::new(decision, request, self.command_max_chars);
        let mut line = match serde_json::to_vec(&rec) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(error = %e, "audit record encode failed");
                return;
            }
        };
        line.push(b'\n');

        if let Err(e) = self.sink.append(&line) {
            tracing::debug!(error = %e, "audit append failed; record dropped");
        }
    }
}

/// First `max` characters; never splits a UTF-8 sequence.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("데이터베이스", 2), "데이");
        assert_eq!(truncate_chars("", 10), "");
    }
}
