//! Single-pass pipeline: parse -> extract -> evaluate -> log -> respond.
//!
//! `parse` never fails and `handle` is total, so `run` cannot fail either.

use bytes::Bytes;
use dbguard_core::protocol::{parse_payload, HookResponse};

use crate::gate::DecisionGate;
use crate::policy::{CommandPolicy, Decision, Verdict};

/// Reason used if a deny ever arrives without one.
const FALLBACK_DENY_REASON: &str = "command is forbidden by policy";

/// Raw stdin bytes in, raw stdout bytes out. Empty output means allow.
pub fn run<P: CommandPolicy>(gate: &DecisionGate<P>, raw_stdin: &[u8]) -> Bytes {
    let payload = parse_payload(raw_stdin);
    let decision = gate.handle(&payload);
    encode_decision(&decision)
}

/// Deny => refusal envelope; Allow => silence.
pub fn encode_decision(decision: &Decision) -> Bytes {
    match decision.verdict {
        Verdict::Allow => Bytes::new(),
        Verdict::Deny => {
            let reason = decision.reason.as_deref().unwrap_or(FALLBACK_DENY_REASON);
            // request time stays fail-open: an unencodable refusal degrades to silence
            HookResponse::deny(reason).encode().unwrap_or_else(|e| {
                tracing::error!(error = %e, "deny response encode failed");
                Bytes::new()
            })
        }
    }
}
