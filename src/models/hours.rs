use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single worked-hours value submitted in one step of the input loop.
///
/// Always finite and non-negative: the only ways to build one are
/// [`HoursEntry::new`] and [`HoursEntry::parse`], both of which validate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct HoursEntry(f64);

impl HoursEntry {
    pub fn new(hours: f64) -> AppResult<Self> {
        if !hours.is_finite() {
            return Err(AppError::InvalidHours(hours.to_string()));
        }
        if hours < 0.0 {
            return Err(AppError::InvalidHours(format!(
                "{hours} (hours cannot be negative)"
            )));
        }
        Ok(Self(hours))
    }

    /// Parse user input such as `"7.5"` or `" 8 "`.
    pub fn parse(input: &str) -> AppResult<Self> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| AppError::InvalidHours(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn hours(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for HoursEntry {
    type Error = AppError;

    fn try_from(value: f64) -> AppResult<Self> {
        Self::new(value)
    }
}

impl From<HoursEntry> for f64 {
    fn from(entry: HoursEntry) -> f64 {
        entry.0
    }
}

impl fmt::Display for HoursEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
