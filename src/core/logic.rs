use crate::core::calculator::{PayrollAccumulator, PayrollRates, PayrollState};
use crate::models::employee::Employee;
use crate::models::hours::HoursEntry;
use crate::models::payroll_summary::PayrollSummary;
use crate::utils::money::round_money;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Fold `entries` for `employee` and produce the rounded summary.
    pub fn build_payroll_summary(
        employee: &Employee,
        entries: &[HoursEntry],
        date: NaiveDate,
        rates: PayrollRates,
    ) -> PayrollSummary {
        let mut run = PayrollRun::new(employee, rates);
        for entry in entries {
            run.record(*entry);
        }
        run.finish(date)
    }

    /// Attach employee, date, entries and the rates used to a final state.
    ///
    /// This is the only place monetary values get rounded.
    pub fn summarize(
        state: &PayrollState,
        employee: &Employee,
        entries: Vec<HoursEntry>,
        date: NaiveDate,
        rates: PayrollRates,
    ) -> PayrollSummary {
        PayrollSummary {
            name: employee.name.clone(),
            employee_id: Some(employee.id),
            date,
            hourly_wage: Some(employee.hourly_wage),
            total_hours: state.total_hours,
            overtime_hours: state.overtime_hours,
            overtime_pay: round_money(state.overtime_pay),
            gross_pay: round_money(state.gross_pay),
            fica_tax: round_money(state.fica_tax),
            net_pay: round_money(state.net_pay),
            entries,
            overtime_threshold: Some(rates.overtime_threshold),
            overtime_multiplier: Some(rates.overtime_multiplier),
            fica_rate: Some(rates.fica_rate),
        }
    }
}

/// One payroll calculation in progress: the accumulator plus the entries
/// fed so far, kept for the time card.
pub struct PayrollRun<'a> {
    employee: &'a Employee,
    rates: PayrollRates,
    accumulator: PayrollAccumulator,
    entries: Vec<HoursEntry>,
}

impl<'a> PayrollRun<'a> {
    pub fn new(employee: &'a Employee, rates: PayrollRates) -> Self {
        Self {
            employee,
            rates,
            accumulator: PayrollAccumulator::new(employee.hourly_wage, rates),
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: HoursEntry) -> &PayrollState {
        self.entries.push(entry);
        self.accumulator.push(entry)
    }

    pub fn entries(&self) -> &[HoursEntry] {
        &self.entries
    }

    pub fn state(&self) -> &PayrollState {
        self.accumulator.state()
    }

    pub fn finish(self, date: NaiveDate) -> PayrollSummary {
        let state = self.accumulator.finish();
        Core::summarize(&state, self.employee, self.entries, date, self.rates)
    }
}
