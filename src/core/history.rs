//! Read-only ledger views: the `history` listing and `timecard` rendering.

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::export::range::parse_range;
use crate::export::timecard::write_timecard_pdf;
use crate::models::timecard::TimeCard;
use crate::store::directory::EmployeeDirectory;
use crate::store::ledger::PayrollLedger;
use crate::ui::messages::success;
use crate::utils::money::{format_hours, format_money};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub struct HistoryLogic;

impl HistoryLogic {
    /// Ledger table filtered by employee and `--range`, `None` if nothing
    /// matches.
    pub fn table(
        cfg: &Config,
        employee: Option<u32>,
        range: Option<&str>,
    ) -> AppResult<Option<String>> {
        let bounds = match range {
            Some(r) if !r.eq_ignore_ascii_case("all") => Some(parse_range(r)?),
            _ => None,
        };

        let ledger = PayrollLedger::load(&cfg.payroll_path())?;
        let records = ledger.filter(employee, bounds);
        if records.is_empty() {
            return Ok(None);
        }

        let c = cfg.currency.as_str();
        let mut table = Table::new(vec![
            Column::right("#", 3),
            Column::new("Date", 10),
            Column::new("Employee", 20),
            Column::right("Hours", 7),
            Column::right("OT", 6),
            Column::right("Gross", 10),
            Column::right("FICA", 9),
            Column::right("Net", 10),
        ]);

        for (index, r) in &records {
            let who = match r.employee_id {
                Some(id) => format!("{} (#{id})", r.name),
                None => r.name.clone(),
            };
            table.add_row(vec![
                index.to_string(),
                r.date.format("%Y-%m-%d").to_string(),
                who,
                format_hours(r.total_hours),
                format_hours(r.overtime_hours),
                format_money(r.gross_pay, c),
                format_money(r.fica_tax, c),
                format_money(r.net_pay, c),
            ]);
        }

        let net_total: f64 = records.iter().map(|(_, r)| r.net_pay).sum();
        let mut out = table.render(&cfg.separator_char);
        out.push_str(&format!(
            "{} record(s), total net pay {}\n",
            records.len(),
            format_money(net_total, c)
        ));

        Ok(Some(out))
    }

    /// Build the time card for ledger record `index` (1-based).
    pub fn timecard(cfg: &Config, index: usize) -> AppResult<TimeCard> {
        let ledger = PayrollLedger::load(&cfg.payroll_path())?;
        let summary = ledger.get(index)?;

        // The employee may have been deleted since; the card does not need it.
        let employee = match summary.employee_id {
            Some(id) => EmployeeDirectory::load(&cfg.employees_path())?.find(id),
            None => None,
        };

        Ok(TimeCard::from_summary(summary, employee.as_ref(), &cfg.currency))
    }

    pub fn write_timecard(cfg: &Config, index: usize, file: &Path, force: bool) -> AppResult<()> {
        let card = Self::timecard(cfg, index)?;
        ensure_writable(file, force)?;
        write_timecard_pdf(&card, file)?;
        success(format!(
            "Time card for record #{} written to {}",
            index,
            file.display()
        ));
        Ok(())
    }
}
