//! Transport layer (hook stdin/stdout).
//!
//! Exposes the adapter that turns one raw request into one raw response.
//! Parsing is fail-open and the caller always exits successfully; the
//! verdict lives only in the response body.

pub mod adapter;

pub use adapter::{encode_decision, run};
