//! Policy layer (deny rule table, decisions, rule engine).
//!
//! Compiles the embedded and operator-supplied deny rules once at startup
//! into an immutable, ordered table that every evaluation shares read-only.

pub mod decision;
pub mod engine;
pub mod rules;

pub use decision::{Decision, Verdict};
pub use engine::{CommandPolicy, RuleEngine};
pub use rules::{Rule, RuleTable, BUILTIN_RULES};
