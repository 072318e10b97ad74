//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid number of hours: {0}")]
    InvalidHours(String),

    #[error("Invalid hourly wage: {0}")]
    InvalidWage(String),

    #[error("Invalid e-mail address: {0}")]
    InvalidEmail(String),

    #[error("Invalid employee name: {0}")]
    InvalidName(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No employee with id {0}")]
    EmployeeNotFound(u32),

    #[error("An employee with e-mail '{0}' already exists")]
    DuplicateEmail(String),

    #[error("No payroll record #{0} in the ledger")]
    RecordNotFound(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
