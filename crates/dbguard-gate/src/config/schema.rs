use std::path::PathBuf;

use serde::Deserialize;
use dbguard_core::error::{GuardError, Result};

/// Supported bounds for `audit.command_max_chars`.
pub const COMMAND_MAX_CHARS_RANGE: std::ops::RangeInclusive<usize> = 16..=4096;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    pub version: u32,

    #[serde(default)]
    pub audit: AuditSection,

    #[serde(default)]
    pub rules: RulesSection,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            audit: AuditSection::default(),
            rules: RulesSection::default(),
        }
    }
}

impl GuardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GuardError::UnsupportedVersion(self.version));
        }

        self.audit.validate()?;
        self.rules.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditSection {
    /// Overrides the default log location. `DBGUARD_AUDIT_LOG` still wins.
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_command_max_chars")]
    pub command_max_chars: usize,
}

impl Default for AuditSection {
    fn default() -> Self {
        Self {
            path: None,
            command_max_chars: default_command_max_chars(),
        }
    }
}

impl AuditSection {
    pub fn validate(&self) -> Result<()> {
        if !COMMAND_MAX_CHARS_RANGE.contains(&self.command_max_chars) {
            return Err(GuardError::Config(format!(
                "audit.command_max_chars must be between {} and {}",
                COMMAND_MAX_CHARS_RANGE.start(),
                COMMAND_MAX_CHARS_RANGE.end()
            )));
        }
        if let Some(p) = &self.path {
            if p.as_os_str().is_empty() {
                return Err(GuardError::Config("audit.path must not be empty".into()));
            }
        }
        Ok(())
    }
}

fn default_command_max_chars() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesSection {
    /// Keep the embedded deny table in front of `deny`.
    #[serde(default = "default_builtin")]
    pub builtin: bool,

    /// Operator rules, appended after the built-ins in file order.
    #[serde(default)]
    pub deny: Vec<RuleSpec>,
}

impl Default for RulesSection {
    fn default() -> Self {
        Self {
            builtin: default_builtin(),
            deny: Vec::new(),
        }
    }
}

impl RulesSection {
    pub fn validate(&self) -> Result<()> {
        if !self.builtin && self.deny.is_empty() {
            return Err(GuardError::Config(
                "rules.deny must not be empty when rules.builtin is false".into(),
            ));
        }
        for (i, r) in self.deny.iter().enumerate() {
            if r.pattern.trim().is_empty() {
                return Err(GuardError::Config(format!("rules.deny[{i}].pattern must not be empty")));
            }
            if r.reason.trim().is_empty() {
                return Err(GuardError::Config(format!("rules.deny[{i}].reason must not be empty")));
            }
        }
        Ok(())
    }
}

fn default_builtin() -> bool {
    true
}

/// Uncompiled deny rule: a case-insensitive regex plus the reason shown on denial.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub pattern: String,
    pub reason: String,
}

impl RuleSpec {
    pub fn new(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
