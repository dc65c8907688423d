//! Startup wiring for the gate.
//!
//! Compiles the rule table, opens the audit sink, and builds the decision
//! gate. Startup errors are explicit (Result instead of panic) so `main`
//! can refuse to run with a broken table.

use std::path::PathBuf;
use std::sync::Arc;

use dbguard_core::error::Result;

use crate::audit::{AuditLogger, AuditSink, FileSink};
use crate::config::GuardConfig;
use crate::gate::DecisionGate;
use crate::policy::{rules::builtin_specs, RuleEngine, RuleTable};

pub struct AppState {
    cfg: GuardConfig,
    rules: Arc<RuleTable>,
    gate: DecisionGate<RuleEngine>,
}

impl AppState {
    /// Build state that appends audit records to `audit_path`.
    pub fn new(cfg: GuardConfig, audit_path: PathBuf) -> Result<Self> {
        Self::with_sink(cfg, Arc::new(FileSink::new(audit_path)))
    }

    /// Build state over an arbitrary sink (tests, embedding).
    pub fn with_sink(cfg: GuardConfig, sink: Arc<dyn AuditSink>) -> Result<Self> {
        cfg.validate()?;

        // 1) Compile the ordered deny table (fatal on any bad pattern)
        let rules = Arc::new(RuleTable::from_config(&cfg.rules)?);

        // 2) Operator rules identical to a built-in can never be reported
        if cfg.rules.builtin {
            let builtin = builtin_specs();
            for (i, spec) in cfg.rules.deny.iter().enumerate() {
                if builtin.iter().any(|b| b.pattern == spec.pattern) {
                    tracing::warn!(rule = i, pattern = %spec.pattern, "rules.deny entry is shadowed by a built-in rule");
                }
            }
        }

        // 3) Gate = engine + audit logger
        let audit = AuditLogger::new(sink, cfg.audit.command_max_chars);
        let gate = DecisionGate::new(RuleEngine::new(Arc::clone(&rules)), audit);

        tracing::debug!(rules = rules.len(), "rule table loaded");

        Ok(Self { cfg, rules, gate })
    }

    pub fn cfg(&self) -> &GuardConfig {
        &self.cfg
    }

    pub fn rules(&self) -> Arc<RuleTable> {
        Arc::clone(&self.rules)
    }

    pub fn gate(&self) -> &DecisionGate<RuleEngine> {
        &self.gate
    }
}
