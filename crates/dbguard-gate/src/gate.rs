//! Decision gate: one request end to end.

use dbguard_core::protocol::request::Payload;
use dbguard_core::protocol::CommandRequest;

use crate::audit::AuditLogger;
use crate::policy::{CommandPolicy, Decision, RuleEngine};

/// Turns one hook payload into one audited `Decision`.
pub struct DecisionGate<P = RuleEngine> {
    policy: P,
    audit: AuditLogger,
}

impl<P: CommandPolicy> DecisionGate<P> {
    pub fn new(policy: P, audit: AuditLogger) -> Self {
        Self { policy, audit }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Total over any payload. An empty or missing command is allowed without
    /// consulting the policy. Exactly one audit record is written per call,
    /// and its outcome never affects the returned decision.
    pub fn handle(&self, payload: &Payload) -> Decision {
        let req = CommandRequest::from_payload(payload);

        let decision = if req.is_empty() {
            Decision::allow()
        } else {
            self.policy.evaluate(&req.raw)
        };

        if let Some(rule) = &decision.matched_rule {
            tracing::info!(rule = rule.index(), reason = %rule.reason(), "command denied");
        } else {
            tracing::trace!(empty = req.is_empty(), "command allowed");
        }

        self.audit.record(&decision, &req);
        decision
    }
}
