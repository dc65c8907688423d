//! Payload extraction vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use dbguard_core::protocol::{parse_payload, CommandRequest};

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn payload_vectors() {
    let files = [
        "bash_command.json",
        "full_context.json",
        "empty_object.json",
        "empty_input.json",
        "truncated_json.json",
        "invalid_utf8.json",
        "top_level_array.json",
        "tool_input_not_object.json",
        "command_not_string.json",
    ];

    for f in files {
        let v = load(f);
        let payload = parse_payload(&v.input.decode());
        let req = CommandRequest::from_payload(&payload);

        assert_eq!(req.raw, v.expect.command, "vector={}", v.description);
        assert_eq!(req.context, v.expect.context, "vector={}", v.description);
    }
}

#[test]
fn whitespace_only_is_empty_payload() {
    assert!(parse_payload(b"  \n\t ").is_empty());
}

#[test]
fn empty_command_is_reported_empty() {
    let payload = parse_payload(br#"{"tool_input":{"command":""}}"#);
    assert!(CommandRequest::from_payload(&payload).is_empty());
}
