//! dbguard core: hook wire protocol and the shared error type.
//!
//! This crate defines the request/response contracts exchanged with the host
//! that issues shell commands, plus the error surface shared by the gate.
//! It carries no matching, storage, or logging dependencies so the wire
//! format can be reused by other hook binaries.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Parsing inbound payloads is total: malformed input degrades to an empty
//! payload instead of an error, so a broken request can never crash the hook.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{GuardError, Result};
