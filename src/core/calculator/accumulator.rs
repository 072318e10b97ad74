//! Folds worked-hours entries for one employee into a payroll state.
//!
//! Every step re-derives overtime from the new running total instead of
//! adding up per-entry overtime, so `[30, 15]`, `[45]` and `[15, 15, 15]`
//! all end in the same state. Values keep full `f64` precision here;
//! rounding happens once, when the summary is built.

use crate::core::calculator::PayrollRates;
use crate::core::calculator::overtime::{gross_pay, overtime_pay, split_hours};
use crate::core::calculator::withholding::{fica_tax, net_pay};
use crate::models::hours::HoursEntry;

/// State after the last folded entry. All zeros before the first one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PayrollState {
    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub overtime_pay: f64,
    pub gross_pay: f64,
    pub fica_tax: f64,
    pub net_pay: f64,
}

#[derive(Debug, Clone)]
pub struct PayrollAccumulator {
    hourly_wage: f64,
    rates: PayrollRates,
    state: PayrollState,
}

impl PayrollAccumulator {
    pub fn new(hourly_wage: f64, rates: PayrollRates) -> Self {
        Self {
            hourly_wage,
            rates,
            state: PayrollState::default(),
        }
    }

    pub fn hourly_wage(&self) -> f64 {
        self.hourly_wage
    }

    /// Fold one entry in and return the updated state.
    pub fn push(&mut self, entry: HoursEntry) -> &PayrollState {
        let total = self.state.total_hours + entry.hours();
        let (regular, overtime) = split_hours(total, self.rates.overtime_threshold);

        let ot_pay = overtime_pay(overtime, self.hourly_wage, self.rates.overtime_multiplier);
        let gross = gross_pay(regular, self.hourly_wage, ot_pay);
        let fica = fica_tax(gross, self.rates.fica_rate);

        self.state = PayrollState {
            total_hours: total,
            regular_hours: regular,
            overtime_hours: overtime,
            overtime_pay: ot_pay,
            gross_pay: gross,
            fica_tax: fica,
            net_pay: net_pay(gross, fica),
        };

        &self.state
    }

    pub fn state(&self) -> &PayrollState {
        &self.state
    }

    pub fn finish(self) -> PayrollState {
        self.state
    }
}

/// Fold a whole sequence in one go.
pub fn accumulate<I>(hourly_wage: f64, rates: PayrollRates, entries: I) -> PayrollState
where
    I: IntoIterator<Item = HoursEntry>,
{
    let mut acc = PayrollAccumulator::new(hourly_wage, rates);
    for entry in entries {
        acc.push(entry);
    }
    acc.finish()
}
