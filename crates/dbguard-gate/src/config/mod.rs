//! Gate config loader (strict parsing) and startup path resolution.
//!
//! Any error here is fatal: the gate refuses to start rather than run with a
//! broken rule table.

pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use dbguard_core::error::{GuardError, Result};

pub use schema::{AuditSection, GuardConfig, RuleSpec, RulesSection};

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "DBGUARD_CONFIG";
/// Env var overriding the audit log location.
pub const AUDIT_LOG_ENV: &str = "DBGUARD_AUDIT_LOG";

const STATE_DIR: &str = ".codeb";
const CONFIG_FILE: &str = "dbguard.yaml";
const AUDIT_FILE: &str = "hook-audit.log";

pub fn load_from_file(path: &Path) -> Result<GuardConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| GuardError::Io(format!("read config {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GuardConfig> {
    let cfg: GuardConfig = serde_yaml::from_str(s)
        .map_err(|e| GuardError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Pick the config source: explicit path, then `<home>/.codeb/dbguard.yaml`,
/// then built-in defaults. An empty explicit path counts as unset.
pub fn resolve(explicit: Option<PathBuf>, home: Option<PathBuf>) -> Result<GuardConfig> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return load_from_file(&path);
    }
    if let Some(home) = home {
        let path = home.join(STATE_DIR).join(CONFIG_FILE);
        if path.is_file() {
            return load_from_file(&path);
        }
    }
    Ok(GuardConfig::default())
}

/// Audit log location: env override, then config, then `<home>/.codeb/hook-audit.log`,
/// then `./.codeb/hook-audit.log` when no home directory is known.
pub fn audit_path(cfg: &GuardConfig, env_override: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(p) = env_override.filter(|p| !p.as_os_str().is_empty()) {
        return p;
    }
    if let Some(p) = &cfg.audit.path {
        return p.clone();
    }
    home.unwrap_or_default().join(STATE_DIR).join(AUDIT_FILE)
}
