//! Printable time card for one payroll run.
//!
//! The card is a plain view over a [`PayrollSummary`]: the same rows feed the
//! terminal rendering and the PDF writer.

use crate::core::calculator::PayrollAccumulator;
use crate::models::employee::Employee;
use crate::models::payroll_summary::PayrollSummary;
use crate::utils::money::{format_hours, format_money};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeCardLine {
    pub index: usize,
    pub hours: f64,
    pub running_total: f64,
    pub overtime_so_far: f64,
}

#[derive(Debug, Clone)]
pub struct TimeCard {
    pub employee_name: String,
    pub employee_id: Option<u32>,
    pub email: Option<String>,
    pub date: NaiveDate,
    pub hourly_wage: Option<f64>,
    pub lines: Vec<TimeCardLine>,
    pub summary: PayrollSummary,
    pub fica_rate: f64,
    pub currency: String,
}

impl TimeCard {
    /// `employee` is the current directory entry, if it still exists; it only
    /// contributes the e-mail address.
    pub fn from_summary(summary: &PayrollSummary, employee: Option<&Employee>, currency: &str) -> Self {
        // Replay the entries with the record's own rates, so the per-entry
        // overtime agrees with the stored totals whatever the config says now.
        let rates = summary.rates();
        let mut acc = PayrollAccumulator::new(summary.hourly_wage.unwrap_or(0.0), rates);
        let lines = summary
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let state = acc.push(*entry);
                TimeCardLine {
                    index: i + 1,
                    hours: entry.hours(),
                    running_total: state.total_hours,
                    overtime_so_far: state.overtime_hours,
                }
            })
            .collect();

        Self {
            employee_name: summary.name.clone(),
            employee_id: summary.employee_id,
            email: employee.map(|e| e.email.clone()),
            date: summary.date,
            hourly_wage: summary.hourly_wage,
            lines,
            summary: summary.clone(),
            fica_rate: rates.fica_rate,
            currency: currency.to_string(),
        }
    }

    pub fn title(&self) -> String {
        format!("Time Card - {} - {}", self.employee_name, self.date)
    }

    /// Key/value rows identifying the card.
    pub fn header_rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![vec!["Employee".to_string(), self.employee_name.clone()]];

        if let Some(id) = self.employee_id {
            rows.push(vec!["Employee ID".into(), id.to_string()]);
        }
        if let Some(email) = &self.email {
            rows.push(vec!["E-mail".into(), email.clone()]);
        }
        rows.push(vec!["Pay date".into(), self.date.format("%Y-%m-%d").to_string()]);
        if let Some(wage) = self.hourly_wage {
            rows.push(vec!["Hourly wage".into(), format_money(wage, &self.currency)]);
        }

        rows
    }

    pub fn entry_headers() -> Vec<&'static str> {
        vec!["#", "Hours", "Running total", "Overtime so far"]
    }

    pub fn entry_rows(&self) -> Vec<Vec<String>> {
        self.lines
            .iter()
            .map(|l| {
                vec![
                    l.index.to_string(),
                    format_hours(l.hours),
                    format_hours(l.running_total),
                    format_hours(l.overtime_so_far),
                ]
            })
            .collect()
    }

    pub fn totals_rows(&self) -> Vec<Vec<String>> {
        let s = &self.summary;
        let c = self.currency.as_str();

        vec![
            vec!["Total hours".into(), format_hours(s.total_hours)],
            vec!["Regular hours".into(), format_hours(s.regular_hours())],
            vec!["Overtime hours".into(), format_hours(s.overtime_hours)],
            vec!["Overtime pay".into(), format_money(s.overtime_pay, c)],
            vec!["Gross pay".into(), format_money(s.gross_pay, c)],
            vec![
                format!("FICA tax ({:.2}%)", self.fica_rate * 100.0),
                format_money(s.fica_tax, c),
            ],
            vec!["Net pay".into(), format_money(s.net_pay, c)],
        ]
    }

    /// Terminal rendering.
    pub fn to_text(&self, separator: &str) -> String {
        let rule = separator.repeat(44);
        let mut out = String::new();

        out.push_str(&self.title());
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        for row in self.header_rows() {
            out.push_str(&format!("{:<18}{}\n", format!("{}:", row[0]), row[1]));
        }

        out.push_str(&rule);
        out.push('\n');

        if self.lines.is_empty() {
            out.push_str("No hours entries recorded.\n");
        } else {
            let headers = Self::entry_headers();
            out.push_str(&format!(
                "{:>4}  {:>8}  {:>13}  {:>15}\n",
                headers[0], headers[1], headers[2], headers[3]
            ));
            for row in self.entry_rows() {
                out.push_str(&format!(
                    "{:>4}  {:>8}  {:>13}  {:>15}\n",
                    row[0], row[1], row[2], row[3]
                ));
            }
        }

        out.push_str(&rule);
        out.push('\n');

        for row in self.totals_rows() {
            out.push_str(&format!("{:<18}{:>14}\n", format!("{}:", row[0]), row[1]));
        }

        out.push_str(&rule);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::PayrollRates;
    use crate::core::logic::Core;
    use crate::models::hours::HoursEntry;

    fn card() -> TimeCard {
        let emp = Employee::new(7, "Jane Doe", "jane@example.com", 20.0).unwrap();
        let entries: Vec<HoursEntry> = [30.0, 15.0]
            .iter()
            .map(|h| HoursEntry::new(*h).unwrap())
            .collect();
        let date = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
        let summary = Core::build_payroll_summary(&emp, &entries, date, PayrollRates::default());
        TimeCard::from_summary(&summary, Some(&emp), "$")
    }

    #[test]
    fn lines_show_overtime_rederived_per_entry() {
        let c = card();
        assert_eq!(c.lines.len(), 2);
        assert_eq!(c.lines[0].overtime_so_far, 0.0);
        assert_eq!(c.lines[1].running_total, 45.0);
        assert_eq!(c.lines[1].overtime_so_far, 5.0);
    }

    #[test]
    fn replay_uses_the_rates_saved_with_the_record() {
        let emp = Employee::new(7, "Jane Doe", "jane@example.com", 20.0).unwrap();
        let entries: Vec<HoursEntry> = [30.0, 15.0]
            .iter()
            .map(|h| HoursEntry::new(*h).unwrap())
            .collect();
        let date = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
        let rates = PayrollRates {
            overtime_threshold: 35.0,
            overtime_multiplier: 1.5,
            fica_rate: 0.10,
        };
        let summary = Core::build_payroll_summary(&emp, &entries, date, rates);

        let c = TimeCard::from_summary(&summary, Some(&emp), "$");
        assert_eq!(c.lines[1].overtime_so_far, summary.overtime_hours);
        assert_eq!(c.lines[1].overtime_so_far, 10.0);
        assert!(c.to_text("-").contains("FICA tax (10.00%)"));
    }

    #[test]
    fn legacy_record_without_rates_reads_as_standard_rates() {
        let emp = Employee::new(7, "Jane Doe", "jane@example.com", 20.0).unwrap();
        let entries: Vec<HoursEntry> = [30.0, 15.0]
            .iter()
            .map(|h| HoursEntry::new(*h).unwrap())
            .collect();
        let date = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
        let mut summary = Core::build_payroll_summary(&emp, &entries, date, PayrollRates::default());
        summary.overtime_threshold = None;
        summary.overtime_multiplier = None;
        summary.fica_rate = None;

        let c = TimeCard::from_summary(&summary, Some(&emp), "$");
        assert_eq!(c.lines[1].overtime_so_far, 5.0);
        assert!(c.to_text("-").contains("FICA tax (7.65%)"));
    }

    #[test]
    fn text_rendering_contains_totals() {
        let text = card().to_text("-");
        assert!(text.contains("Time Card - Jane Doe - 2025-06-06"));
        assert!(text.contains("jane@example.com"));
        assert!(text.contains("$950.00"));
        assert!(text.contains("FICA tax (7.65%)"));
        assert!(text.contains("$72.68"));
        assert!(text.contains("$877.33"));
    }
}
