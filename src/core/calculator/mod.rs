//! Pure payroll arithmetic: overtime split, withholding and the per-entry
//! accumulator. Nothing in here touches the filesystem or the terminal.

pub mod accumulator;
pub mod overtime;
pub mod withholding;

pub use accumulator::{PayrollAccumulator, PayrollState, accumulate};

/// Weekly hours paid at the regular rate.
pub const DEFAULT_OVERTIME_THRESHOLD: f64 = 40.0;
/// Overtime pay multiplier applied to the hourly wage.
pub const DEFAULT_OVERTIME_MULTIPLIER: f64 = 1.5;
/// Flat FICA withholding rate (7.65%).
pub const DEFAULT_FICA_RATE: f64 = 0.0765;

/// Rates applied by one accumulation run.
///
/// Built by the caller (usually from [`crate::config::Config::payroll_rates`])
/// and handed to the accumulator explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayrollRates {
    pub overtime_threshold: f64,
    pub overtime_multiplier: f64,
    pub fica_rate: f64,
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            overtime_threshold: DEFAULT_OVERTIME_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            fica_rate: DEFAULT_FICA_RATE,
        }
    }
}
