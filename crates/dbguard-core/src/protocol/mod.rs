//! Hook protocol (request payload + response envelope).
//!
//! - Request: one JSON object per invocation, read from stdin. Only
//!   `tool_input.command` drives decisions; a few other fields are lifted
//!   into the audit context.
//! - Response: a `hookSpecificOutput` envelope on denial, nothing on allow.
//!
//! The verdict travels in the response body, never in the exit status.

pub mod request;
pub mod response;

pub use request::{parse_payload, CommandRequest};
pub use response::HookResponse;
