//! Deny rule table.
//!
//! Ordering contract: rules are evaluated in table order and the first match
//! wins. When two patterns can match the same command, the rule whose reason
//! should be reported must come first. Built-ins always precede operator rules.

use regex::{Regex, RegexBuilder};

use dbguard_core::error::{GuardError, Result};

use crate::config::{RuleSpec, RulesSection};

/// Embedded deny table: `(pattern, reason)`, in evaluation order.
pub const BUILTIN_RULES: &[(&str, &str)] = &[
    // databases, containers, volumes
    (r"docker\s+(rm|remove)\s+.*postgres", "PostgreSQL container deletion is forbidden"),
    (r"docker\s+(rm|remove)\s+.*redis", "Redis container deletion is forbidden"),
    (r"docker\s+volume\s+(rm|remove)\s+.*postgres", "PostgreSQL volume deletion is forbidden"),
    (r"docker\s+volume\s+(rm|remove)\s+.*redis", "Redis volume deletion is forbidden"),
    (r"rm\s+(-rf|-fr).*postgres.*data", "PostgreSQL data deletion is forbidden"),
    (r"rm\s+(-rf|-fr).*redis.*data", "Redis data deletion is forbidden"),
    (r"DROP\s+DATABASE", "DROP DATABASE is forbidden"),
    (r"dropdb\s+", "dropdb is forbidden"),
    (r"FLUSHALL", "Redis FLUSHALL is forbidden"),
    (r"FLUSHDB", "Redis FLUSHDB is forbidden"),
    // host destruction
    (r"rm\s+(-rf|-fr)\s+/\s*$", "Root directory deletion is forbidden"),
    (r"rm\s+(-rf|-fr)\s+/var/lib/docker\s*$", "Deleting all Docker data is forbidden"),
    (r"docker\s+system\s+prune\s+(-a|--all)\s+(-f|--force)", "Forced full Docker prune is forbidden"),
    (r"docker\s+volume\s+prune\s+(-a|--all)\s+(-f|--force)", "Forced deletion of all volumes is forbidden"),
    (r"mkfs\.", "Filesystem formatting is forbidden"),
    (r"dd\s+if=.*of=/dev/", "Raw disk writes are forbidden"),
];

/// Compiled deny rule. Immutable once built.
#[derive(Debug, Clone)]
pub struct Rule {
    index: usize,
    regex: Regex,
    reason: String,
}

impl Rule {
    /// Compile one rule; matching is case-insensitive search anywhere in the line.
    pub fn compile(index: usize, spec: &RuleSpec) -> Result<Self> {
        let regex = RegexBuilder::new(&spec.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| GuardError::InvalidRule {
                index,
                pattern: spec.pattern.clone(),
                message: e.to_string(),
            })?;
        Ok(Self {
            index,
            regex,
            reason: spec.reason.clone(),
        })
    }

    /// Position in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn is_match(&self, raw: &str) -> bool {
        self.regex.is_match(raw)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.pattern() == other.pattern() && self.reason == other.reason
    }
}

/// Ordered, immutable collection of deny rules.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compile specs in order. The first invalid pattern aborts the whole table.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let mut rules = Vec::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            rules.push(Rule::compile(i, spec)?);
        }
        Ok(Self { rules })
    }

    /// The embedded table only.
    pub fn builtin() -> Result<Self> {
        Self::compile(&builtin_specs())
    }

    /// Built-ins (unless disabled) followed by operator rules.
    pub fn from_config(section: &RulesSection) -> Result<Self> {
        let mut specs = if section.builtin { builtin_specs() } else { Vec::new() };
        specs.extend(section.deny.iter().cloned());
        Self::compile(&specs)
    }

    pub fn first_match(&self, raw: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.is_match(raw))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub fn builtin_specs() -> Vec<RuleSpec> {
    BUILTIN_RULES
        .iter()
        .map(|(p, r)| RuleSpec::new(*p, *r))
        .collect()
}
