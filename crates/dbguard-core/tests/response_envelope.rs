//! Denial envelope shape tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use dbguard_core::protocol::response::{HookResponse, PRE_TOOL_USE};

#[test]
fn deny_envelope_shape() {
    let body = HookResponse::deny("DROP DATABASE is forbidden").encode().unwrap();
    assert!(body.ends_with(b"\n"));

    let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let out = &v["hookSpecificOutput"];
    assert_eq!(out["hookEventName"], PRE_TOOL_USE);
    assert_eq!(out["permissionDecision"], "deny");
    assert_eq!(out["permissionDecisionReason"], "DROP DATABASE is forbidden");
}

#[test]
fn deny_envelope_decodes_back() {
    let resp = HookResponse::deny("Redis FLUSHALL is forbidden");
    let decoded: HookResponse = serde_json::from_slice(&resp.encode().unwrap()).unwrap();
    assert_eq!(decoded, resp);
}

#[test]
fn serialized_field_names_match_protocol() {
    let v = serde_json::to_value(HookResponse::deny("Redis FLUSHDB is forbidden")).unwrap();
    let out = v["hookSpecificOutput"].as_object().unwrap();
    let mut keys: Vec<_> = out.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["hookEventName", "permissionDecision", "permissionDecisionReason"]);
}
