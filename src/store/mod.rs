//! JSON-file backed stores: employee directory, payroll ledger, audit log.

pub mod audit_log;
pub mod directory;
pub mod json_store;
pub mod ledger;

use crate::config::Config;
use crate::ui::messages::warning;

/// Write an audit line without ever failing the command that triggered it.
pub fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit_log::ttlog(&cfg.log_path(), operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
