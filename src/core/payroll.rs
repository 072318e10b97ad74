//! The `run` workflow: collect hours for one employee, show the summary,
//! optionally save it to the ledger and render a time card.

use crate::config::Config;
use crate::core::logic::{Core, PayrollRun};
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::export::timecard::write_timecard_pdf;
use crate::models::employee::Employee;
use crate::models::hours::HoursEntry;
use crate::models::payroll_summary::PayrollSummary;
use crate::models::timecard::TimeCard;
use crate::store::audit;
use crate::store::directory::EmployeeDirectory;
use crate::store::ledger::PayrollLedger;
use crate::ui::messages::success;
use crate::ui::prompt::{HoursInput, confirm, prompt_hours};
use crate::utils::money::{format_hours, format_money};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Hours given on the command line; `None` means prompt for them.
    pub hours: Option<Vec<HoursEntry>>,
    pub date: NaiveDate,
    pub save: bool,
    pub timecard: Option<PathBuf>,
    pub force: bool,
}

pub struct PayrollLogic;

impl PayrollLogic {
    /// Run payroll for `employee_id` on the real terminal.
    pub fn run(cfg: &Config, employee_id: u32, opts: &RunOptions) -> AppResult<Vec<PayrollSummary>> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Self::run_with(cfg, employee_id, opts, &mut stdin.lock(), &mut stdout.lock())
    }

    /// Same as [`PayrollLogic::run`] with explicit input/output.
    ///
    /// The employee is looked up before anything is asked, so an unknown id
    /// never reaches the prompt loop.
    pub fn run_with<R: BufRead, W: Write>(
        cfg: &Config,
        employee_id: u32,
        opts: &RunOptions,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<Vec<PayrollSummary>> {
        let employee = EmployeeDirectory::load(&cfg.employees_path())?.get(employee_id)?;

        if let Some(hours) = &opts.hours {
            let summary =
                Core::build_payroll_summary(&employee, hours, opts.date, cfg.payroll_rates());
            write!(out, "{}", render_summary(&summary, cfg))?;
            out.flush()?;

            if opts.save {
                save_summary(cfg, &summary)?;
            }
            if let Some(path) = &opts.timecard {
                write_run_timecard(cfg, &summary, &employee, path, opts.force)?;
            }
            return Ok(vec![summary]);
        }

        let mut summaries = Vec::new();

        loop {
            let summary = collect_interactive(cfg, &employee, opts.date, input, out)?;
            write!(out, "{}", render_summary(&summary, cfg))?;
            out.flush()?;

            if opts.save
                || confirm(
                    input,
                    out,
                    "Would you like to save the payroll summary to the ledger?",
                )?
            {
                save_summary(cfg, &summary)?;
            }

            if let Some(path) = &opts.timecard {
                // later runs in the same session replace the card
                let force = opts.force || !summaries.is_empty();
                write_run_timecard(cfg, &summary, &employee, path, force)?;
            }

            summaries.push(summary);

            if !confirm(input, out, "Would you like to calculate another payroll?")? {
                break;
            }
        }

        Ok(summaries)
    }
}

/// Prompt until `done`, folding each entry as it arrives.
fn collect_interactive<R: BufRead, W: Write>(
    cfg: &Config,
    employee: &Employee,
    date: NaiveDate,
    input: &mut R,
    out: &mut W,
) -> AppResult<PayrollSummary> {
    writeln!(
        out,
        "Payroll for {} (#{}) at {}/h",
        employee.name,
        employee.id,
        format_money(employee.hourly_wage, &cfg.currency)
    )?;

    let mut run = PayrollRun::new(employee, cfg.payroll_rates());

    while let HoursInput::Entry(entry) = prompt_hours(input, out)? {
        let state = run.record(entry);
        writeln!(
            out,
            "  running total: {} h ({} overtime)",
            format_hours(state.total_hours),
            format_hours(state.overtime_hours)
        )?;
    }

    Ok(run.finish(date))
}

fn save_summary(cfg: &Config, summary: &PayrollSummary) -> AppResult<usize> {
    let mut ledger = PayrollLedger::load(&cfg.payroll_path())?;
    let index = ledger.append(summary.clone())?;

    success(format!(
        "Payroll summary saved to {} (record #{})",
        ledger.path().display(),
        index
    ));

    audit(
        cfg,
        "run",
        &summary
            .employee_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
        &format!(
            "Payroll #{} for {}: {:.2} h, net {}",
            index,
            summary.name,
            summary.total_hours,
            format_money(summary.net_pay, &cfg.currency)
        ),
    );

    Ok(index)
}

fn write_run_timecard(
    cfg: &Config,
    summary: &PayrollSummary,
    employee: &Employee,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;
    let card = TimeCard::from_summary(summary, Some(employee), &cfg.currency);
    write_timecard_pdf(&card, path)?;
    success(format!("Time card written to {}", path.display()));
    Ok(())
}

/// Terminal payroll summary block.
pub fn render_summary(summary: &PayrollSummary, cfg: &Config) -> String {
    let c = cfg.currency.as_str();
    let rule = cfg.separator_char.repeat(40);
    let wage = summary.hourly_wage.unwrap_or(0.0);
    let rates = summary.rates();

    let mut lines = vec![
        String::new(),
        "Payroll Summary".to_string(),
        rule.clone(),
    ];

    let id = summary
        .employee_id
        .map(|id| format!(" (#{id})"))
        .unwrap_or_default();

    let rows = [
        ("Employee", format!("{}{}", summary.name, id)),
        ("Date", summary.date.format("%Y-%m-%d").to_string()),
        ("Total Hours Worked", format_hours(summary.total_hours)),
        (
            "Regular Hours",
            format!(
                "{} x {}",
                format_hours(summary.regular_hours()),
                format_money(wage, c)
            ),
        ),
        (
            "Overtime Hours",
            format!(
                "{} x {}",
                format_hours(summary.overtime_hours),
                format_money(wage * rates.overtime_multiplier, c)
            ),
        ),
        ("Overtime Pay", format_money(summary.overtime_pay, c)),
        ("Gross Pay", format_money(summary.gross_pay, c)),
        (
            "FICA Tax",
            format!(
                "{} ({:.2}%)",
                format_money(summary.fica_tax, c),
                rates.fica_rate * 100.0
            ),
        ),
        ("Net Pay", format_money(summary.net_pay, c)),
    ];

    for (label, value) in rows {
        lines.push(format!("{:<20}{}", format!("{label}:"), value));
    }

    lines.push(rule);
    lines.push(String::new());
    lines.join("\n")
}
