//! End-to-end hook scenarios: raw stdin bytes in, raw stdout bytes out.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use dbguard_core::protocol::HookResponse;
use dbguard_gate::{app_state::AppState, audit::MemorySink, config::GuardConfig, transport};

fn state() -> (AppState, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let state = AppState::with_sink(GuardConfig::default(), sink.clone()).unwrap();
    (state, sink)
}

fn denied_reason(out: &[u8]) -> String {
    let resp: HookResponse = serde_json::from_slice(out).expect("deny body must be a hook response");
    assert_eq!(resp.output.hook_event_name, "PreToolUse");
    assert_eq!(resp.output.permission_decision, "deny");
    resp.output.permission_decision_reason
}

#[test]
fn postgres_container_removal_denied() {
    let (st, _) = state();
    let out = transport::run(st.gate(), br#"{"tool_input":{"command":"docker rm my-postgres-prod"}}"#);
    assert!(denied_reason(&out).contains("PostgreSQL container deletion"));
}

#[test]
fn listing_allowed_silently() {
    let (st, _) = state();
    let out = transport::run(st.gate(), br#"{"tool_input":{"command":"ls -la /tmp"}}"#);
    assert!(out.is_empty());
}

#[test]
fn empty_object_allowed() {
    let (st, _) = state();
    assert!(transport::run(st.gate(), b"{}").is_empty());
}

#[test]
fn drop_database_denied() {
    let (st, _) = state();
    let out = transport::run(st.gate(), br#"{"tool_input":{"command":"DROP DATABASE orders;"}}"#);
    assert!(denied_reason(&out).contains("DROP DATABASE"));
}

#[test]
fn root_deletion_denied() {
    let (st, _) = state();
    let out = transport::run(st.gate(), br#"{"tool_input":{"command":"rm -rf /"}}"#);
    assert!(denied_reason(&out).contains("Root directory deletion"));
}

#[test]
fn unparsable_body_allowed() {
    let (st, sink) = state();
    let inputs: [&[u8]; 4] = [b"not json at all", b"", b"{\"tool_input\":", b"\xff\xfe"];
    for raw in inputs {
        assert!(transport::run(st.gate(), raw).is_empty());
    }
    // still audited, once per invocation
    assert_eq!(sink.lines().len(), 4);
}

#[test]
fn operator_rule_denies_via_adapter() {
    let cfg = dbguard_gate::config::load_from_str(
        "version: 1\nrules:\n  deny:\n    - pattern: \"terraform\\\\s+destroy\"\n      reason: \"Terraform destroy is forbidden\"\n",
    )
    .unwrap();
    let st = AppState::with_sink(cfg, Arc::new(MemorySink::new())).unwrap();
    let out = transport::run(st.gate(), br#"{"tool_input":{"command":"cd infra && Terraform   Destroy"}}"#);
    assert_eq!(denied_reason(&out), "Terraform destroy is forbidden");
}
