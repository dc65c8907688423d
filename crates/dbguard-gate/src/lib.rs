//! dbguard gate library entry.
//!
//! This crate wires the config loader, deny rule table, rule engine, decision
//! gate, audit logger, and stdin/stdout adapter into the pre-execution hook.
//! It is consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod audit;
pub mod config;
pub mod gate;
pub mod policy;
pub mod transport;
