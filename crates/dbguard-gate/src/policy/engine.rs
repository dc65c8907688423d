use std::sync::Arc;

use super::decision::Decision;
use super::rules::RuleTable;

/// Seam between the decision gate and whatever judges command text.
pub trait CommandPolicy: Send + Sync {
    /// Judge one literal command line. Must be deterministic and side-effect-free.
    fn evaluate(&self, raw: &str) -> Decision;
}

/// Production policy: first matching deny rule in table order wins.
/// Construct once at startup, then share via Arc.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    table: Arc<RuleTable>,
}

impl RuleEngine {
    pub fn new(table: Arc<RuleTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

impl CommandPolicy for RuleEngine {
    /// The whole line is searched, so `a && b; c | d` is caught if any part
    /// matches. No shell parsing, no splitting.
    fn evaluate(&self, raw: &str) -> Decision {
        match self.table.first_match(raw) {
            Some(rule) => Decision::deny(rule),
            None => Decision::allow(),
        }
    }
}
