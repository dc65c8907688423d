use super::rules::Rule;

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Deny,
}

impl Verdict {
    /// Audit log `action` value.
    pub fn as_action(self) -> &'static str {
        match self {
            Verdict::Allow => "ALLOWED",
            Verdict::Deny => "DENIED",
        }
    }
}

/// Terminal verdict for one command. Built once, then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub verdict: Verdict,
    pub reason: Option<String>,
    pub matched_rule: Option<Rule>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            verdict: Verdict::Allow,
            reason: None,
            matched_rule: None,
        }
    }

    pub fn deny(rule: &Rule) -> Self {
        Self {
            verdict: Verdict::Deny,
            reason: Some(rule.reason().to_string()),
            matched_rule: Some(rule.clone()),
        }
    }

    pub fn is_deny(&self) -> bool {
        self.verdict == Verdict::Deny
    }
}
