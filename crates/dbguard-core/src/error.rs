//! Shared error type across dbguard crates.
//!
//! Every variant here is a startup-time fault. Request handling is total and
//! never produces a `GuardError`.

use thiserror::Error;

/// Machine-readable error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or out-of-range configuration.
    ConfigInvalid,
    /// Unsupported configuration schema version.
    UnsupportedVersion,
    /// A deny rule pattern failed to compile.
    RuleInvalid,
    /// Reading configuration from storage failed.
    Io,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in diagnostics and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalid => "CONFIG_INVALID",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::RuleInvalid => "RULE_INVALID",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Unified error type used by core and gate.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid deny rule #{index} ({pattern}): {message}")]
    InvalidRule {
        index: usize,
        pattern: String,
        message: String,
    },
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GuardError {
    /// Map the error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GuardError::Config(_) => ErrorCode::ConfigInvalid,
            GuardError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            GuardError::InvalidRule { .. } => ErrorCode::RuleInvalid,
            GuardError::Io(_) => ErrorCode::Io,
            GuardError::Internal(_) => ErrorCode::Internal,
        }
    }
}
