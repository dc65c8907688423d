//! dbguard pre-execution hook.
//!
//! Reads one request from stdin, writes a refusal envelope to stdout when the
//! command is denied, and always exits 0 once started. The host learns the
//! verdict from stdout, never from the exit status.
//!
//! The only non-zero exit is a startup fault (bad config or rule pattern):
//! the gate refuses to run with an undefined rule table.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use dbguard_gate::{app_state::AppState, config, transport};

const STARTUP_FAILURE: u8 = 2;

fn main() -> ExitCode {
    // stdout carries the response; diagnostics go to stderr
    let filter = EnvFilter::try_from_env("DBGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let home = dirs::home_dir();
    let cfg = match config::resolve(std::env::var_os(config::CONFIG_ENV).map(Into::into), home.clone()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "config load failed");
            return ExitCode::from(STARTUP_FAILURE);
        }
    };

    let audit_path = config::audit_path(&cfg, std::env::var_os(config::AUDIT_LOG_ENV).map(Into::into), home);
    let state = match AppState::new(cfg, audit_path) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "rule table build failed");
            return ExitCode::from(STARTUP_FAILURE);
        }
    };

    let mut input = Vec::new();
    if let Err(e) = io::stdin().lock().read_to_end(&mut input) {
        tracing::debug!(error = %e, "stdin read failed; treating as empty request");
        input.clear();
    }

    let out = transport::run(state.gate(), &input);
    if !out.is_empty() {
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(&out).and_then(|_| stdout.flush());
    }

    ExitCode::SUCCESS
}
