use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)+$")
        .expect("e-mail pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub hourly_wage: f64,
}

impl Employee {
    /// Build a validated employee. Name and e-mail are trimmed.
    pub fn new(id: u32, name: &str, email: &str, hourly_wage: f64) -> AppResult<Self> {
        Ok(Self {
            id,
            name: validate_name(name)?,
            email: validate_email(email)?,
            hourly_wage: validate_wage(hourly_wage)?,
        })
    }
}

pub fn validate_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidName("name cannot be empty".into()));
    }
    Ok(trimmed.to_string())
}

pub fn validate_email(email: &str) -> AppResult<String> {
    let trimmed = email.trim();
    if !EMAIL_RE.is_match(trimmed) {
        return Err(AppError::InvalidEmail(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Hourly wage must be a finite, strictly positive amount.
pub fn validate_wage(wage: f64) -> AppResult<f64> {
    if !wage.is_finite() || wage <= 0.0 {
        return Err(AppError::InvalidWage(wage.to_string()));
    }
    Ok(wage)
}
